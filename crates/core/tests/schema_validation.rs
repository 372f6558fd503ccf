//! Validates exported catalogs against the embedded catalog JSON Schema.

use kitforge_core::{Catalog, Registry, CATALOG_SCHEMA};
use serde_json::json;

fn validator() -> jsonschema::Validator {
    let schema: serde_json::Value = serde_json::from_str(CATALOG_SCHEMA).unwrap();
    jsonschema::validator_for(&schema).unwrap_or_else(|e| panic!("Failed to compile schema: {}", e))
}

#[test]
fn builtin_catalog_matches_schema() {
    let catalog = Catalog::from_registry(&Registry::builtin());
    let instance = serde_json::to_value(&catalog).unwrap();
    let errors: Vec<String> = validator()
        .iter_errors(&instance)
        .map(|e| e.to_string())
        .collect();
    assert!(
        errors.is_empty(),
        "built-in catalog failed schema validation:\n{}",
        errors.join("\n")
    );
}

#[test]
fn custom_template_matches_schema() {
    let instance = json!({
        "breakpoints": [{ "name": "sm", "minWidth": 640 }],
        "components": [{
            "identifier": "Badge",
            "displayName": "Badge",
            "template": { "custom": { "container": true } },
            "props": [{ "name": "count", "kind": "number", "defaultValue": 3 }]
        }]
    });
    assert!(validator().validate(&instance).is_ok());
}

#[test]
fn unknown_prop_kind_fails_schema() {
    let instance = json!({
        "breakpoints": [],
        "components": [{
            "identifier": "Badge",
            "displayName": "Badge",
            "props": [{ "name": "count", "kind": "integer" }]
        }]
    });
    assert!(validator().validate(&instance).is_err());
}

#[test]
fn missing_components_fails_schema() {
    let instance = json!({ "breakpoints": [] });
    assert!(validator().validate(&instance).is_err());
}
