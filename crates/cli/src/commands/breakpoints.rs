use kitforge_core::BreakpointTable;

use super::{print_json, registry_or_exit};
use crate::config::Config;
use crate::OutputFormat;

pub(crate) fn cmd_breakpoints(config: &Config, output: OutputFormat, quiet: bool) {
    let registry = registry_or_exit(config, output, quiet);
    let table = registry.breakpoints();
    match output {
        OutputFormat::Text => print!("{}", breakpoints_text(table)),
        OutputFormat::Json => print_json(&serde_json::json!({
            "breakpoints": table.as_slice(),
            "default": table.default_name(),
        })),
    }
}

fn breakpoints_text(table: &BreakpointTable) -> String {
    let width = table.iter().map(|bp| bp.name.len()).max().unwrap_or(0);
    table
        .iter()
        .map(|bp| {
            let marker = if table.default_name() == Some(bp.name.as_str()) {
                "  (default)"
            } else {
                ""
            };
            format!(
                "{:<width$}  {:>5}px{}\n",
                bp.name,
                bp.min_width,
                marker,
                width = width
            )
        })
        .collect()
}
