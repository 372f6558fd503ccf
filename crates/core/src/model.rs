//! Component definitions: props schema, variant tables and template kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::PropValue;

/// Declared type of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    String,
    Boolean,
    Number,
}

impl PropKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PropKind::String => "string",
            PropKind::Boolean => "boolean",
            PropKind::Number => "number",
        }
    }
}

/// One configurable input of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDefinition {
    pub name: String,
    pub kind: PropKind,
    #[serde(default)]
    pub description: String,
    /// Allowed options, in presentation order. Only meaningful for strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<PropValue>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl PropDefinition {
    pub fn new(name: &str, kind: PropKind, description: &str) -> Self {
        PropDefinition {
            name: name.to_string(),
            kind,
            description: description.to_string(),
            allowed_values: None,
            default_value: None,
            required: false,
        }
    }

    /// A string prop restricted to `options`.
    pub fn options(name: &str, description: &str, options: &[&str], default: &str) -> Self {
        PropDefinition {
            allowed_values: Some(options.iter().map(|o| o.to_string()).collect()),
            default_value: Some(PropValue::text(default)),
            ..PropDefinition::new(name, PropKind::String, description)
        }
    }

    pub fn flag(name: &str, description: &str, default: bool) -> Self {
        PropDefinition {
            default_value: Some(PropValue::Bool(default)),
            ..PropDefinition::new(name, PropKind::Boolean, description)
        }
    }

    pub fn with_default(mut self, value: impl Into<PropValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn allows(&self, value: &str) -> bool {
        self.allowed_values
            .as_ref()
            .map_or(true, |values| values.iter().any(|v| v == value))
    }
}

/// Class fragments for one prop, keyed by prop value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    pub prop: String,
    pub classes: BTreeMap<String, String>,
}

impl VariantGroup {
    pub fn new(prop: &str, classes: &[(&str, &str)]) -> Self {
        VariantGroup {
            prop: prop.to_string(),
            classes: classes
                .iter()
                .map(|(value, class)| (value.to_string(), class.to_string()))
                .collect(),
        }
    }

    pub fn class_for(&self, value: &str) -> Option<&str> {
        self.classes.get(value).map(String::as_str)
    }
}

/// Structural kind of the emitted markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Wraps nested content: `<X ...>content</X>`.
    Container,
    /// Self-closing: `<X ... />`.
    Leaf,
}

/// Which template renders a component.
///
/// Adding a built-in template means adding a variant here; every renderer
/// match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Button,
    Card,
    Modal,
    Accordion,
    Tabs,
    Sidebar,
    /// A catalog-defined component with no dedicated template.
    Custom {
        #[serde(default)]
        container: bool,
    },
}

impl Default for TemplateKind {
    fn default() -> Self {
        TemplateKind::Custom { container: false }
    }
}

impl TemplateKind {
    pub fn shape(self) -> Shape {
        match self {
            TemplateKind::Button => Shape::Leaf,
            TemplateKind::Card
            | TemplateKind::Modal
            | TemplateKind::Accordion
            | TemplateKind::Tabs
            | TemplateKind::Sidebar => Shape::Container,
            TemplateKind::Custom { container: true } => Shape::Container,
            TemplateKind::Custom { container: false } => Shape::Leaf,
        }
    }
}

/// Static schema for one generatable component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub identifier: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub template: TemplateKind,
    pub props: Vec<PropDefinition>,
    /// Variant groups in declaration order; class strings are assembled in
    /// this order.
    #[serde(default)]
    pub variants: Vec<VariantGroup>,
}

impl ComponentDefinition {
    pub fn prop(&self, name: &str) -> Option<&PropDefinition> {
        self.props.iter().find(|p| p.name == name)
    }

    pub fn variant(&self, prop: &str) -> Option<&VariantGroup> {
        self.variants.iter().find(|g| g.prop == prop)
    }

    pub fn shape(&self) -> Shape {
        self.template.shape()
    }

    /// Each declared default, keyed by prop name. Props without a default
    /// are absent.
    pub fn defaults(&self) -> BTreeMap<String, PropValue> {
        self.props
            .iter()
            .filter_map(|p| p.default_value.clone().map(|v| (p.name.clone(), v)))
            .collect()
    }
}
