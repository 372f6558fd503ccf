use kitforge_core::Registry;

use super::{print_json, registry_or_exit};
use crate::config::Config;
use crate::OutputFormat;

pub(crate) fn cmd_list(config: &Config, output: OutputFormat, quiet: bool) {
    let registry = registry_or_exit(config, output, quiet);
    match output {
        OutputFormat::Text => print!("{}", list_text(&registry)),
        OutputFormat::Json => print_json(&list_json(&registry)),
    }
}

fn list_text(registry: &Registry) -> String {
    let width = registry
        .components()
        .iter()
        .map(|c| c.identifier.len())
        .max()
        .unwrap_or(0);
    registry
        .components()
        .iter()
        .map(|c| format!("{:<width$}  {}\n", c.identifier, c.description, width = width))
        .collect()
}

fn list_json(registry: &Registry) -> serde_json::Value {
    let components: Vec<serde_json::Value> = registry
        .components()
        .iter()
        .map(|c| {
            serde_json::json!({
                "identifier": c.identifier,
                "displayName": c.display_name,
                "description": c.description,
                "template": c.template,
            })
        })
        .collect();
    serde_json::json!({ "components": components })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_aligned() {
        let text = list_text(&Registry::builtin());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Button     A button component with various styles and sizes");
        assert!(lines[5].starts_with("Sidebar    "));
    }

    #[test]
    fn json_names_templates() {
        let json = list_json(&Registry::builtin());
        assert_eq!(json["components"][2]["identifier"], "Modal");
        assert_eq!(json["components"][2]["template"], "modal");
    }
}
