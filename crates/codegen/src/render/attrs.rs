//! Prop-to-attribute emission.

use kitforge_core::{ComponentDefinition, PropValue};

use crate::resolve::PropMap;

/// The attribute text for one prop, or `None` when it is omitted.
///
/// Strings emit `name="value"`, `true` emits the bare name, `false` and the
/// empty string are omitted, everything else is a braced JSON literal. A
/// string holding a double quote falls back to the braced form.
pub fn attribute(name: &str, value: &PropValue) -> Option<String> {
    match value {
        PropValue::Text(s) if s.is_empty() => None,
        PropValue::Text(s) if s.contains('"') => Some(braced(name, value)),
        PropValue::Text(s) => Some(format!("{}=\"{}\"", name, s)),
        PropValue::Bool(true) => Some(name.to_string()),
        PropValue::Bool(false) => None,
        PropValue::Number(_) | PropValue::Structured(_) => Some(braced(name, value)),
    }
}

fn braced(name: &str, value: &PropValue) -> String {
    format!("{}={{{}}}", name, value.to_literal())
}

/// Props in emission order: declared props first, in declaration order,
/// then undeclared ones by name.
pub fn ordered<'p>(
    definition: &ComponentDefinition,
    props: &'p PropMap,
) -> Vec<(&'p str, &'p PropValue)> {
    let declared = definition
        .props
        .iter()
        .filter_map(|p| props.get_key_value(p.name.as_str()));
    let extra = props
        .iter()
        .filter(|(name, _)| definition.prop(name).is_none());
    declared
        .chain(extra)
        .map(|(name, value)| (name.as_str(), value))
        .collect()
}

/// Every emitted attribute, in order.
pub fn attributes(definition: &ComponentDefinition, props: &PropMap) -> Vec<String> {
    ordered(definition, props)
        .into_iter()
        .filter_map(|(name, value)| attribute(name, value))
        .collect()
}
