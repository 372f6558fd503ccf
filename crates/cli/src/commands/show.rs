use std::process;

use kitforge_core::ComponentDefinition;

use super::{print_json, registry_or_exit};
use crate::config::Config;
use crate::edits::component_name;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_show(config: &Config, component: &str, output: OutputFormat, quiet: bool) {
    let registry = registry_or_exit(config, output, quiet);
    let definition = match registry.lookup(&component_name(component)) {
        Ok(d) => d,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };
    match output {
        OutputFormat::Text => print!("{}", show_text(definition)),
        OutputFormat::Json => {
            print_json(&serde_json::to_value(definition).unwrap_or_default());
        }
    }
}

fn show_text(definition: &ComponentDefinition) -> String {
    let mut out = format!("{}\n{}\n", definition.display_name, definition.description);

    if !definition.props.is_empty() {
        out.push_str("\nProps:\n");
        for prop in &definition.props {
            let mut line = format!("  {} ({})", prop.name, prop.kind.as_str());
            if prop.required {
                line.push_str(" required");
            }
            if let Some(default) = &prop.default_value {
                line.push_str(&format!(" = {}", default.to_literal()));
            }
            if let Some(values) = &prop.allowed_values {
                line.push_str(&format!(" [{}]", values.join(", ")));
            }
            out.push_str(&line);
            out.push('\n');
            if !prop.description.is_empty() {
                out.push_str(&format!("      {}\n", prop.description));
            }
        }
    }

    if !definition.variants.is_empty() {
        out.push_str("\nVariants:\n");
        for group in &definition.variants {
            out.push_str(&format!("  {}\n", group.prop));
            let width = group.classes.keys().map(String::len).max().unwrap_or(0);
            for (value, classes) in &group.classes {
                out.push_str(&format!("    {:<width$}  {}\n", value, classes, width = width));
            }
        }
    }
    out
}
