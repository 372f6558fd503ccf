//! The component registry: an immutable catalog built once at startup.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{CatalogError, LookupError};
use crate::model::ComponentDefinition;
use crate::responsive::BreakpointTable;

/// All component definitions plus the breakpoint table.
///
/// Built once and then only read; share it by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentDefinition>,
    index: BTreeMap<String, usize>,
    breakpoints: BreakpointTable,
}

impl Registry {
    /// Build a registry, checking catalog invariants.
    ///
    /// Hard violations (duplicate identifiers or prop names, variant groups
    /// for undeclared props, defaults of the wrong kind) are errors. Variant
    /// keys outside a prop's allowed values are only logged; they simply
    /// never match.
    pub fn new(
        components: Vec<ComponentDefinition>,
        breakpoints: BreakpointTable,
    ) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();
        for (i, component) in components.iter().enumerate() {
            validate_component(component)?;
            if index.insert(component.identifier.clone(), i).is_some() {
                return Err(CatalogError::invalid(
                    "components",
                    format!("duplicate component '{}'", component.identifier),
                ));
            }
        }
        debug!(
            components = components.len(),
            breakpoints = breakpoints.len(),
            "registry built"
        );
        Ok(Registry {
            components,
            index,
            breakpoints,
        })
    }

    /// Assemble a registry from parts already known to be valid.
    pub(crate) fn from_parts(
        components: Vec<ComponentDefinition>,
        breakpoints: BreakpointTable,
    ) -> Self {
        let index = components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.identifier.clone(), i))
            .collect();
        Registry {
            components,
            index,
            breakpoints,
        }
    }

    /// Find a component by its exact, case-sensitive identifier.
    pub fn lookup(&self, identifier: &str) -> Result<&ComponentDefinition, LookupError> {
        match self.index.get(identifier) {
            Some(&i) => Ok(&self.components[i]),
            None => {
                debug!(identifier, "component lookup missed");
                Err(LookupError::NotFound {
                    identifier: identifier.to_string(),
                })
            }
        }
    }

    /// Definitions in registration order.
    pub fn components(&self) -> &[ComponentDefinition] {
        &self.components
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }
}

fn validate_component(component: &ComponentDefinition) -> Result<(), CatalogError> {
    let id = component.identifier.as_str();
    if id.is_empty() {
        return Err(CatalogError::invalid("components", "empty component identifier"));
    }

    for (i, prop) in component.props.iter().enumerate() {
        if prop.name.is_empty() {
            return Err(CatalogError::invalid(id, "empty prop name"));
        }
        if component.props[..i].iter().any(|p| p.name == prop.name) {
            return Err(CatalogError::invalid(
                id,
                format!("duplicate prop '{}'", prop.name),
            ));
        }
        if let Some(default) = &prop.default_value {
            if !default.matches_kind(prop.kind) {
                return Err(CatalogError::invalid(
                    id,
                    format!(
                        "default for '{}' does not match kind {}",
                        prop.name,
                        prop.kind.as_str()
                    ),
                ));
            }
        }
    }

    for (i, group) in component.variants.iter().enumerate() {
        let Some(prop) = component.prop(&group.prop) else {
            return Err(CatalogError::invalid(
                id,
                format!("variant group for undeclared prop '{}'", group.prop),
            ));
        };
        if component.variants[..i].iter().any(|g| g.prop == group.prop) {
            return Err(CatalogError::invalid(
                id,
                format!("duplicate variant group '{}'", group.prop),
            ));
        }
        for value in group.classes.keys() {
            if !prop.allows(value) {
                warn!(
                    component = id,
                    prop = %group.prop,
                    value = %value,
                    "variant value is not an allowed value of its prop"
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropDefinition, PropKind, TemplateKind, VariantGroup};
    use crate::value::PropValue;

    fn component(id: &str) -> ComponentDefinition {
        ComponentDefinition {
            identifier: id.to_string(),
            display_name: id.to_string(),
            description: String::new(),
            template: TemplateKind::default(),
            props: vec![PropDefinition::options("size", "", &["sm", "md"], "md")],
            variants: vec![VariantGroup::new("size", &[("sm", "small"), ("md", "medium")])],
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let registry =
            Registry::new(vec![component("Button")], BreakpointTable::standard()).unwrap();
        assert_eq!(registry.lookup("Button").unwrap().identifier, "Button");
        assert_eq!(
            registry.lookup("button").unwrap_err(),
            LookupError::NotFound {
                identifier: "button".to_string()
            }
        );
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let registry =
            Registry::new(vec![component("Button")], BreakpointTable::standard()).unwrap();
        assert!(matches!(
            registry.lookup("Tooltip"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn components_keep_registration_order() {
        let registry = Registry::new(
            vec![component("Zeta"), component("Alpha")],
            BreakpointTable::standard(),
        )
        .unwrap();
        let ids: Vec<&str> = registry
            .components()
            .iter()
            .map(|c| c.identifier.as_str())
            .collect();
        assert_eq!(ids, ["Zeta", "Alpha"]);
    }

    #[test]
    fn duplicate_component_rejected() {
        let err = Registry::new(
            vec![component("Button"), component("Button")],
            BreakpointTable::standard(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate component 'Button'"));
    }

    #[test]
    fn duplicate_prop_rejected() {
        let mut c = component("Button");
        c.props.push(PropDefinition::new("size", PropKind::String, ""));
        let err = Registry::new(vec![c], BreakpointTable::standard()).unwrap_err();
        assert!(err.to_string().contains("duplicate prop 'size'"));
    }

    #[test]
    fn variant_for_undeclared_prop_rejected() {
        let mut c = component("Button");
        c.variants.push(VariantGroup::new("tone", &[("warm", "text-red-500")]));
        let err = Registry::new(vec![c], BreakpointTable::standard()).unwrap_err();
        assert!(err.to_string().contains("undeclared prop 'tone'"));
    }

    #[test]
    fn default_of_wrong_kind_rejected() {
        let mut c = component("Button");
        c.props.push(PropDefinition::new("count", PropKind::Number, "").with_default("three"));
        let err = Registry::new(vec![c], BreakpointTable::standard()).unwrap_err();
        assert!(err.to_string().contains("does not match kind number"));
    }

    #[test]
    fn unmapped_variant_value_is_tolerated() {
        let mut c = component("Button");
        c.variants[0]
            .classes
            .insert("huge".to_string(), "text-6xl".to_string());
        c.props
            .push(PropDefinition::new("count", PropKind::Number, "").with_default(PropValue::integer(1)));
        assert!(Registry::new(vec![c], BreakpointTable::standard()).is_ok());
    }
}
