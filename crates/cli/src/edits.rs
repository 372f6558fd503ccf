//! `--set` parsing and value coercion.

use kitforge_core::{ComponentDefinition, PropKind, PropValue, ResponsiveValue};

/// One parsed `--set` argument.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Edit {
    pub prop: String,
    pub value: ResponsiveValue<PropValue>,
}

/// Parse `name=value` or `breakpoint:name=value` against `definition`.
///
/// Declared props are coerced by kind. Undeclared props infer a boolean,
/// then a number, then a JSON array or object, and fall back to text.
pub(crate) fn parse_edit(definition: &ComponentDefinition, raw: &str) -> Result<Edit, String> {
    let (target, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid --set '{}': expected name=value", raw))?;

    let (breakpoint, prop) = match target.split_once(':') {
        Some((bp, prop)) => (Some(bp.trim()), prop.trim()),
        None => (None, target.trim()),
    };
    if prop.is_empty() {
        return Err(format!("invalid --set '{}': missing prop name", raw));
    }
    if breakpoint.is_some_and(str::is_empty) {
        return Err(format!("invalid --set '{}': missing breakpoint name", raw));
    }

    let value = coerce(definition, prop, value)?;
    let value = match breakpoint {
        Some(bp) => ResponsiveValue::at(bp, value),
        None => ResponsiveValue::Base(value),
    };
    Ok(Edit {
        prop: prop.to_string(),
        value,
    })
}

fn coerce(definition: &ComponentDefinition, prop: &str, raw: &str) -> Result<PropValue, String> {
    let Some(declared) = definition.prop(prop) else {
        return Ok(infer(raw));
    };
    match declared.kind {
        PropKind::String => Ok(PropValue::text(raw)),
        PropKind::Boolean => match raw {
            "true" => Ok(PropValue::Bool(true)),
            "false" => Ok(PropValue::Bool(false)),
            _ => Err(format!(
                "invalid value for '{}': expected true or false, got '{}'",
                prop, raw
            )),
        },
        PropKind::Number => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(number)
            .ok_or_else(|| format!("invalid value for '{}': expected a number, got '{}'", prop, raw)),
    }
}

fn infer(raw: &str) -> PropValue {
    match raw {
        "true" => return PropValue::Bool(true),
        "false" => return PropValue::Bool(false),
        _ => {}
    }
    if let Some(value) = raw.parse::<f64>().ok().and_then(number) {
        return value;
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => {
            PropValue::from_json(json)
        }
        _ => PropValue::text(raw),
    }
}

/// Whole numbers stay integral so `3` does not print as `3.0`.
fn number(value: f64) -> Option<PropValue> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(PropValue::integer(value as i64))
    } else {
        PropValue::number(value)
    }
}

/// Upper-case the first character of a component name.
pub(crate) fn component_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
