//! JSON catalog files.
//!
//! A catalog describes breakpoints and components in the same shape the
//! model types serialize to, so the built-in registry can be exported,
//! edited and loaded back in place of the defaults.
//!
//! ```json
//! {
//!   "breakpoints": [{ "name": "sm", "minWidth": 640 }],
//!   "defaultBreakpoint": "sm",
//!   "components": [{
//!     "identifier": "Badge",
//!     "displayName": "Badge",
//!     "template": { "custom": { "container": false } },
//!     "props": [{ "name": "tone", "kind": "string", "defaultValue": "info" }],
//!     "variants": [{ "prop": "tone", "classes": { "info": "bg-cyan-100" } }]
//!   }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::model::ComponentDefinition;
use crate::registry::Registry;
use crate::responsive::{Breakpoint, BreakpointTable};

/// JSON Schema for catalog files.
pub const CATALOG_SCHEMA: &str = include_str!("../schema/catalog-schema.json");

/// Serialized form of a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub breakpoints: Vec<Breakpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_breakpoint: Option<String>,
    pub components: Vec<ComponentDefinition>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Capture a registry as a catalog.
    pub fn from_registry(registry: &Registry) -> Self {
        Catalog {
            breakpoints: registry.breakpoints().as_slice().to_vec(),
            default_breakpoint: registry.breakpoints().default_name().map(str::to_string),
            components: registry.components().to_vec(),
        }
    }

    /// Check invariants and build the registry.
    pub fn into_registry(self) -> Result<Registry, CatalogError> {
        let mut table = BreakpointTable::new(self.breakpoints)?;
        if let Some(name) = &self.default_breakpoint {
            table = table.with_default(name)?;
        }
        Registry::new(self.components, table)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read a catalog file and build a registry from it.
pub fn load_registry(path: &Path) -> Result<Registry, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = Catalog::from_json_str(&json)?.into_registry()?;
    debug!(path = %path.display(), "catalog loaded");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplateKind;
    use serde_json::json;

    fn badge_catalog() -> serde_json::Value {
        json!({
            "breakpoints": [
                { "name": "wide", "minWidth": 1200 },
                { "name": "narrow", "minWidth": 480 }
            ],
            "defaultBreakpoint": "narrow",
            "components": [{
                "identifier": "Badge",
                "displayName": "Status badge",
                "template": { "custom": { "container": false } },
                "props": [
                    { "name": "tone", "kind": "string", "allowedValues": ["info", "warn"], "defaultValue": "info" },
                    { "name": "count", "kind": "number" }
                ],
                "variants": [{ "prop": "tone", "classes": { "info": "bg-cyan-100", "warn": "bg-amber-100" } }]
            }]
        })
    }

    #[test]
    fn catalog_builds_registry() {
        let registry = Catalog::from_json_value(badge_catalog())
            .unwrap()
            .into_registry()
            .unwrap();
        let badge = registry.lookup("Badge").unwrap();
        assert_eq!(badge.display_name, "Status badge");
        assert_eq!(badge.template, TemplateKind::Custom { container: false });
        assert_eq!(badge.props.len(), 2);
        let names: Vec<&str> = registry
            .breakpoints()
            .iter()
            .map(|bp| bp.name.as_str())
            .collect();
        assert_eq!(names, ["narrow", "wide"]);
        assert_eq!(registry.breakpoints().default_name(), Some("narrow"));
    }

    #[test]
    fn builtin_round_trips_through_json() {
        let registry = Registry::builtin();
        let json = Catalog::from_registry(&registry).to_json_pretty().unwrap();
        let reloaded = Catalog::from_json_str(&json)
            .unwrap()
            .into_registry()
            .unwrap();
        assert_eq!(reloaded.components(), registry.components());
        assert_eq!(reloaded.breakpoints(), registry.breakpoints());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn invariant_violation_is_reported() {
        let mut value = badge_catalog();
        value["components"][0]["variants"][0]["prop"] = json!("shade");
        let err = Catalog::from_json_value(value)
            .unwrap()
            .into_registry()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }));
        assert!(err.to_string().starts_with("Badge:"));
    }

    #[test]
    fn load_registry_reads_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, badge_catalog().to_string()).unwrap();
        let registry = load_registry(&path).unwrap();
        assert!(registry.lookup("Badge").is_ok());
    }

    #[test]
    fn load_registry_missing_file() {
        let err = load_registry(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
