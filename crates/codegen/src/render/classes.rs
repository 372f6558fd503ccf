//! Class-string assembly from variant tables.

use kitforge_core::{prefix_classes, ComponentDefinition};

use crate::resolve::PropMap;

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize(classes: &str) -> String {
    classes.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Class fragments for `props`, in variant-table order.
///
/// Values with no mapped fragment contribute nothing.
pub fn class_string(definition: &ComponentDefinition, props: &PropMap) -> String {
    let mut out = String::new();
    for group in &definition.variants {
        let fragment = props
            .get(&group.prop)
            .and_then(|value| value.variant_key())
            .and_then(|key| group.class_for(&key).map(str::to_string));
        if let Some(fragment) = fragment {
            out.push_str(&fragment);
            out.push(' ');
        }
    }
    normalize(&out)
}

/// Base classes followed by each breakpoint's prefixed override classes,
/// with repeated tokens dropped.
pub fn responsive_class_string<'a, I>(definition: &ComponentDefinition, base: &PropMap, overrides: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a PropMap)>,
{
    let mut parts = vec![class_string(definition, base)];
    for (breakpoint, props) in overrides {
        parts.push(prefix_classes(breakpoint, &class_string(definition, props)));
    }
    dedupe_tokens(parts.iter().map(String::as_str))
}

/// Join class strings, keeping the first occurrence of each token.
pub fn dedupe_tokens<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitforge_core::{PropValue, Registry};

    fn props(pairs: &[(&str, PropValue)]) -> PropMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  a   b\n c  "), "a b c");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn classes_follow_variant_order() {
        let registry = Registry::builtin();
        let card = registry.lookup("Card").unwrap();
        let p = props(&[
            ("shadow", PropValue::text("lg")),
            ("variant", PropValue::text("outline")),
        ]);
        assert_eq!(
            class_string(card, &p),
            "border border-gray-200 bg-white shadow-lg"
        );
    }

    #[test]
    fn unmapped_and_structured_values_contribute_nothing() {
        let registry = Registry::builtin();
        let card = registry.lookup("Card").unwrap();
        let p = props(&[
            ("variant", PropValue::text("neon")),
            ("padding", PropValue::Structured(serde_json::json!(["sm"]))),
            ("shadow", PropValue::text("sm")),
        ]);
        assert_eq!(class_string(card, &p), "shadow-sm");
    }

    #[test]
    fn responsive_union_prefixes_overrides() {
        let registry = Registry::builtin();
        let tabs = registry.lookup("Tabs").unwrap();
        let base = props(&[
            ("size", PropValue::text("sm")),
            ("orientation", PropValue::text("vertical")),
        ]);
        let md = props(&[("orientation", PropValue::text("horizontal"))]);
        let lg = props(&[("size", PropValue::text("lg"))]);
        let classes = responsive_class_string(tabs, &base, [("md", &md), ("lg", &lg)]);
        assert_eq!(classes, "text-sm flex-col md:flex-row lg:text-lg");
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        assert_eq!(dedupe_tokens(["a b", "b c", "a"]), "a b c");
    }
}
