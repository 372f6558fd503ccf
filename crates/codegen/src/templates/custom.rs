use kitforge_core::{ComponentDefinition, PropKind};

use super::{quoted, PropView};

/// A generic `div`-rooted module for catalog-defined components.
pub(super) fn emit(
    definition: &ComponentDefinition,
    view: &PropView<'_>,
    classes: &str,
    container: bool,
) -> String {
    let name = definition.identifier.as_str();

    let mut fields = String::new();
    let mut params = String::from("className, ");
    for prop in &definition.props {
        let ts_type = match prop.kind {
            PropKind::String => view.narrowed(&prop.name, "string"),
            PropKind::Number => view.narrowed(&prop.name, "number"),
            PropKind::Boolean => "boolean".to_string(),
        };
        let default = view.literal(&prop.name);
        if is_identifier(&prop.name) {
            fields.push_str(&format!("  {}?: {};\n", prop.name, ts_type));
            params.push_str(&format!("{} = {}, ", prop.name, default));
        } else {
            let key = quoted(&prop.name);
            fields.push_str(&format!("  {}?: {};\n", key, ts_type));
            params.push_str(&format!("{}: {} = {}, ", key, binding(&prop.name), default));
        }
    }
    if container {
        params.push_str("children, ");
    }
    params.push_str("...props");

    let element = if container {
        "\n      >\n        {children}\n      </div>"
    } else {
        "\n      />"
    };

    format!(
        r#"import {{ HTMLAttributes, forwardRef }} from "react";
import {{ cn }} from "@/lib/utils";

export interface {name}Props extends HTMLAttributes<HTMLDivElement> {{
{fields}}}

const {name} = forwardRef<HTMLDivElement, {name}Props>(
  ({{ {params} }}, ref) => {{
    return (
      <div
        className={{cn(
          {classes},
          className
        )}}
        ref={{ref}}
        {{...props}}{element}
    );
  }}
);

{name}.displayName = "{name}";

export {{ {name} }};"#,
        name = name,
        fields = fields,
        params = params,
        classes = quoted(classes),
        element = element,
    )
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A camelCase local name for a prop name that is not an identifier,
/// e.g. `aria-label` binds as `ariaLabel`.
fn binding(name: &str) -> String {
    let mut out = String::new();
    for word in name
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if out.is_empty() {
            out.push_str(word);
        } else if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if !is_identifier(&out) {
        out.insert(0, '_');
    }
    out
}
