pub(crate) mod breakpoints;
pub(crate) mod export;
pub(crate) mod generate;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod validate;

use std::path::Path;
use std::process;

use kitforge_core::Registry;

use crate::config::Config;
use crate::{report_error, OutputFormat};

/// The configured registry, or report and exit.
pub(crate) fn registry_or_exit(config: &Config, output: OutputFormat, quiet: bool) -> Registry {
    match config.registry() {
        Ok(r) => r,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Write `content` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("could not create '{}': {}", parent.display(), e))?;
    }
    std::fs::write(path, content).map_err(|e| format!("could not write '{}': {}", path.display(), e))
}

/// Report a written file unless quiet.
pub(crate) fn report_written(path: &Path, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => println!("wrote {}", path.display()),
        OutputFormat::Json => print_json(&serde_json::json!({ "written": path.display().to_string() })),
    }
}
