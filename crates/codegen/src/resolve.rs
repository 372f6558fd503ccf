//! Prop resolution: defaults, base edits and per-breakpoint overrides.

use std::collections::BTreeMap;

use kitforge_core::{Breakpoint, BreakpointTable, ComponentDefinition, PropValue, ResponsiveValue};
use serde::Serialize;
use tracing::debug;

/// Prop values keyed by prop name.
pub type PropMap = BTreeMap<String, PropValue>;

/// Merged prop state: base values plus overrides per breakpoint name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedProps {
    pub base: PropMap,
    pub overrides: BTreeMap<String, PropMap>,
}

impl ResolvedProps {
    /// Seed `base` with every declared default.
    pub fn defaults(definition: &ComponentDefinition) -> Self {
        ResolvedProps {
            base: definition.defaults(),
            overrides: BTreeMap::new(),
        }
    }

    /// Apply one edit.
    ///
    /// A base value replaces the previous base value and leaves overrides
    /// alone. A per-breakpoint record merges into the overrides of each
    /// breakpoint it names. Prop names are not checked against the schema
    /// and values are never coerced.
    pub fn apply(&mut self, prop: &str, value: ResponsiveValue<PropValue>) {
        match value {
            ResponsiveValue::Base(v) => self.set_base(prop, v),
            ResponsiveValue::Overrides(map) => {
                for (breakpoint, v) in map {
                    self.set_override(&breakpoint, prop, v);
                }
            }
        }
    }

    pub fn set_base(&mut self, prop: &str, value: PropValue) {
        self.base.insert(prop.to_string(), value);
    }

    pub fn set_override(&mut self, breakpoint: &str, prop: &str, value: PropValue) {
        self.overrides
            .entry(breakpoint.to_string())
            .or_default()
            .insert(prop.to_string(), value);
    }

    /// Base values with the overrides of `breakpoint` laid on top.
    pub fn merged_at(&self, breakpoint: &str) -> PropMap {
        let mut merged = self.base.clone();
        if let Some(overrides) = self.overrides.get(breakpoint) {
            merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    /// The props in effect at `breakpoint`: base values with the overrides
    /// of every known breakpoint at or below it laid on top, ascending.
    ///
    /// `None` when the table has no such name.
    pub fn in_effect_at(&self, breakpoint: &str, table: &BreakpointTable) -> Option<PropMap> {
        let limit = table.position(breakpoint)?;
        let mut merged = self.base.clone();
        for bp in &table.as_slice()[..=limit] {
            if let Some(overrides) = self.overrides.get(&bp.name) {
                merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        Some(merged)
    }

    /// Breakpoints with overrides that the table knows, ascending.
    pub fn active_breakpoints<'t>(&self, table: &'t BreakpointTable) -> Vec<&'t Breakpoint> {
        table
            .iter()
            .filter(|bp| self.overrides.get(&bp.name).is_some_and(|m| !m.is_empty()))
            .collect()
    }

    /// Override keys the table does not know. Kept, never rendered.
    pub fn unknown_breakpoints(&self, table: &BreakpointTable) -> Vec<&str> {
        self.overrides
            .keys()
            .filter(|name| table.get(name).is_none())
            .map(String::as_str)
            .collect()
    }
}

/// Resolve a component's defaults plus `edits`, applied in order.
pub fn resolve<I, S>(definition: &ComponentDefinition, edits: I) -> ResolvedProps
where
    I: IntoIterator<Item = (S, ResponsiveValue<PropValue>)>,
    S: AsRef<str>,
{
    let mut resolved = ResolvedProps::defaults(definition);
    for (prop, value) in edits {
        resolved.apply(prop.as_ref(), value);
    }
    debug!(
        component = %definition.identifier,
        base = resolved.base.len(),
        breakpoints = resolved.overrides.len(),
        "props resolved"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitforge_core::Registry;

    fn button() -> ComponentDefinition {
        Registry::builtin().lookup("Button").unwrap().clone()
    }

    #[test]
    fn no_edits_yields_defaults() {
        let def = button();
        let resolved = resolve(&def, Vec::<(&str, ResponsiveValue<PropValue>)>::new());
        assert_eq!(resolved.base, def.defaults());
        assert!(resolved.overrides.is_empty());
    }

    #[test]
    fn base_edit_replaces_value() {
        let resolved = resolve(
            &button(),
            [("size", ResponsiveValue::Base(PropValue::text("lg")))],
        );
        assert_eq!(resolved.base["size"], PropValue::text("lg"));
    }

    #[test]
    fn override_edits_merge_per_breakpoint() {
        let resolved = resolve(
            &button(),
            [
                ("size", ResponsiveValue::at("lg", PropValue::text("lg"))),
                ("variant", ResponsiveValue::at("lg", PropValue::text("ghost"))),
                ("size", ResponsiveValue::at("sm", PropValue::text("xs"))),
            ],
        );
        assert_eq!(resolved.overrides["lg"].len(), 2);
        assert_eq!(resolved.overrides["lg"]["size"], PropValue::text("lg"));
        assert_eq!(resolved.overrides["lg"]["variant"], PropValue::text("ghost"));
        assert_eq!(resolved.overrides["sm"]["size"], PropValue::text("xs"));
        assert_eq!(resolved.base["size"], PropValue::text("md"));
    }

    #[test]
    fn base_and_overrides_are_independent() {
        let mut resolved = ResolvedProps::defaults(&button());
        resolved.apply("size", ResponsiveValue::at("lg", PropValue::text("xl")));
        resolved.apply("size", ResponsiveValue::Base(PropValue::text("sm")));
        assert_eq!(resolved.overrides["lg"]["size"], PropValue::text("xl"));
        assert_eq!(resolved.base["size"], PropValue::text("sm"));

        resolved.apply("size", ResponsiveValue::at("lg", PropValue::text("lg")));
        assert_eq!(resolved.base["size"], PropValue::text("sm"));
        assert_eq!(resolved.overrides["lg"]["size"], PropValue::text("lg"));
    }

    #[test]
    fn unknown_props_are_kept() {
        let resolved = resolve(
            &button(),
            [("tooltip", ResponsiveValue::Base(PropValue::text("Save")))],
        );
        assert_eq!(resolved.base["tooltip"], PropValue::text("Save"));
    }

    #[test]
    fn values_are_not_coerced() {
        let resolved = resolve(
            &button(),
            [("size", ResponsiveValue::Base(PropValue::integer(3)))],
        );
        assert_eq!(resolved.base["size"], PropValue::integer(3));
    }

    #[test]
    fn merged_at_prefers_override() {
        let mut resolved = ResolvedProps::defaults(&button());
        resolved.set_override("lg", "size", PropValue::text("lg"));
        let merged = resolved.merged_at("lg");
        assert_eq!(merged["size"], PropValue::text("lg"));
        assert_eq!(merged["variant"], PropValue::text("solid"));
        assert_eq!(resolved.merged_at("md"), resolved.base);
    }

    #[test]
    fn in_effect_at_cascades_from_lower_breakpoints() {
        let table = BreakpointTable::standard();
        let mut resolved = ResolvedProps::defaults(&button());
        resolved.set_override("sm", "size", PropValue::text("lg"));
        resolved.set_override("sm", "variant", PropValue::text("ghost"));
        resolved.set_override("lg", "size", PropValue::text("xl"));
        resolved.set_override("tv", "size", PropValue::text("xs"));

        let at_md = resolved.in_effect_at("md", &table).unwrap();
        assert_eq!(at_md["size"], PropValue::text("lg"));
        assert_eq!(at_md["variant"], PropValue::text("ghost"));

        let at_xl = resolved.in_effect_at("xl", &table).unwrap();
        assert_eq!(at_xl["size"], PropValue::text("xl"));
        assert_eq!(at_xl["variant"], PropValue::text("ghost"));

        assert!(resolved.in_effect_at("tv", &table).is_none());
    }

    #[test]
    fn active_breakpoints_follow_table_order() {
        let table = BreakpointTable::standard();
        let mut resolved = ResolvedProps::defaults(&button());
        resolved.set_override("xl", "size", PropValue::text("xl"));
        resolved.set_override("sm", "size", PropValue::text("sm"));
        resolved.set_override("tv", "size", PropValue::text("xl"));
        let names: Vec<&str> = resolved
            .active_breakpoints(&table)
            .iter()
            .map(|bp| bp.name.as_str())
            .collect();
        assert_eq!(names, ["sm", "xl"]);
        assert_eq!(resolved.unknown_breakpoints(&table), ["tv"]);
    }
}
