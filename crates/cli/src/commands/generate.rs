use std::process;

use kitforge_codegen::{Generator, Placeholder, Session};
use kitforge_core::BreakpointTable;
use tracing::debug;

use super::{print_json, registry_or_exit, report_written, write_file};
use crate::config::{Config, Mode};
use crate::edits::{component_name, parse_edit};
use crate::{report_error, GenerateArgs, OutputFormat};

pub(crate) fn cmd_generate(config: &Config, args: &GenerateArgs, output: OutputFormat, quiet: bool) {
    let registry = registry_or_exit(config, output, quiet);

    let placeholder = if args.sample {
        Placeholder::Sample
    } else {
        config
            .generate
            .placeholder
            .map(Placeholder::from)
            .unwrap_or_default()
    };
    let mode = args.mode.or(config.generate.mode).unwrap_or_default();

    let generator = Generator::new(&registry).with_placeholder(placeholder);
    let mut session = match generator.session(&component_name(&args.component)) {
        Ok(s) => s,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    for raw in &args.set {
        match parse_edit(session.definition(), raw) {
            Ok(edit) => {
                session.apply(&edit.prop, edit.value);
            }
            Err(msg) => {
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        }
    }

    let breakpoint = match target_breakpoint(args, registry.breakpoints()) {
        Ok(bp) => bp,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    if mode == Mode::Responsive && breakpoint.is_some() {
        report_error(
            "--breakpoint and --width do not apply to responsive mode",
            output,
            quiet,
        );
        process::exit(1);
    }
    debug!(
        component = %session.definition().identifier,
        mode = ?mode,
        breakpoint = breakpoint.as_deref().unwrap_or("base"),
        "generating"
    );

    let (text, json) = match produce(&session, mode, breakpoint.as_deref()) {
        Ok(pair) => pair,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match &args.out {
        Some(path) => {
            if let Err(msg) = write_file(path, &text) {
                report_error(&msg, output, quiet);
                process::exit(1);
            }
            report_written(path, output, quiet);
        }
        None => match output {
            OutputFormat::Text => println!("{}", text),
            OutputFormat::Json => print_json(&json),
        },
    }
}

/// The breakpoint named by `--breakpoint`, or the one `--width` falls in.
///
/// A width below the first breakpoint selects the base rendering.
fn target_breakpoint(args: &GenerateArgs, table: &BreakpointTable) -> Result<Option<String>, String> {
    if let Some(name) = &args.breakpoint {
        return match table.get(name) {
            Some(bp) => Ok(Some(bp.name.clone())),
            None => Err(format!("unknown breakpoint: {}", name)),
        };
    }
    Ok(args
        .width
        .and_then(|w| table.at_width(w))
        .map(|bp| bp.name.clone()))
}

/// Generated text plus its JSON form.
fn produce(
    session: &Session<'_>,
    mode: Mode,
    breakpoint: Option<&str>,
) -> Result<(String, serde_json::Value), String> {
    let component = session.definition().identifier.as_str();
    match mode {
        Mode::Usage => {
            let rendering = match breakpoint {
                Some(bp) => session
                    .usage_at(bp)
                    .ok_or_else(|| format!("unknown breakpoint: {}", bp))?,
                None => session.usage(),
            };
            let json = serde_json::json!({
                "component": component,
                "breakpoint": breakpoint,
                "markup": rendering.markup,
                "classes": rendering.classes,
            });
            Ok((rendering.markup, json))
        }
        Mode::Module => {
            let source = match breakpoint {
                Some(bp) => session
                    .module_source_at(bp)
                    .ok_or_else(|| format!("unknown breakpoint: {}", bp))?,
                None => session.module_source(),
            };
            let json = serde_json::json!({
                "component": component,
                "breakpoint": breakpoint,
                "source": source,
            });
            Ok((source, json))
        }
        Mode::Responsive => {
            let rendered = session.responsive();
            let json = serde_json::to_value(&rendered).map_err(|e| e.to_string())?;
            Ok((rendered.to_text(), json))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitforge_core::Registry;

    fn args(breakpoint: Option<&str>, width: Option<u32>) -> GenerateArgs {
        GenerateArgs {
            component: "Button".to_string(),
            set: Vec::new(),
            mode: None,
            breakpoint: breakpoint.map(str::to_string),
            width,
            sample: false,
            out: None,
        }
    }

    #[test]
    fn width_picks_enclosing_breakpoint() {
        let table = BreakpointTable::standard();
        assert_eq!(target_breakpoint(&args(None, Some(800)), &table), Ok(Some("md".to_string())));
        assert_eq!(target_breakpoint(&args(None, Some(320)), &table), Ok(None));
        assert_eq!(target_breakpoint(&args(None, None), &table), Ok(None));
    }

    #[test]
    fn unknown_breakpoint_name() {
        let table = BreakpointTable::standard();
        assert_eq!(
            target_breakpoint(&args(Some("tv"), None), &table),
            Err("unknown breakpoint: tv".to_string())
        );
    }

    #[test]
    fn usage_json_carries_classes() {
        let registry = Registry::builtin();
        let session = Generator::new(&registry).session("Card").unwrap();
        let (text, json) = produce(&session, Mode::Usage, None).unwrap();
        assert!(text.starts_with("<Card\n  variant=\"solid\""));
        assert_eq!(json["classes"], "bg-white p-4 rounded-md shadow-md");
        assert!(json["breakpoint"].is_null());
    }
}
