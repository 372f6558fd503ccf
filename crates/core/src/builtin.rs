//! The built-in component catalog.

use crate::model::{ComponentDefinition, PropDefinition, PropKind, TemplateKind, VariantGroup};
use crate::registry::Registry;
use crate::responsive::BreakpointTable;

const SIZES: &[&str] = &["xs", "sm", "md", "lg", "xl"];

impl Registry {
    /// The six built-in components with the standard breakpoint table.
    pub fn builtin() -> Self {
        Registry::from_parts(builtin_components(), BreakpointTable::standard())
    }
}

/// Definitions of Button, Card, Modal, Accordion, Tabs and Sidebar.
pub fn builtin_components() -> Vec<ComponentDefinition> {
    vec![button(), card(), modal(), accordion(), tabs(), sidebar()]
}

fn definition(
    identifier: &str,
    description: &str,
    template: TemplateKind,
    props: Vec<PropDefinition>,
    variants: Vec<VariantGroup>,
) -> ComponentDefinition {
    ComponentDefinition {
        identifier: identifier.to_string(),
        display_name: identifier.to_string(),
        description: description.to_string(),
        template,
        props,
        variants,
    }
}

fn button() -> ComponentDefinition {
    definition(
        "Button",
        "A button component with various styles and sizes",
        TemplateKind::Button,
        vec![
            PropDefinition::options(
                "variant",
                "The visual style of the button",
                &["solid", "outline", "ghost", "link"],
                "solid",
            ),
            PropDefinition::options("size", "The size of the button", SIZES, "md"),
            PropDefinition::options(
                "color",
                "The color of the button",
                &["primary", "secondary", "success", "danger", "warning", "info"],
                "primary",
            ),
            PropDefinition::options(
                "rounded",
                "The border radius of the button",
                &["none", "sm", "md", "lg", "full"],
                "md",
            ),
            PropDefinition::flag("disabled", "Whether the button is disabled", false),
            PropDefinition::flag(
                "fullWidth",
                "Whether the button should take up the full width of its container",
                false,
            ),
        ],
        vec![
            VariantGroup::new(
                "variant",
                &[
                    ("solid", "bg-primary-500 text-white hover:bg-primary-600"),
                    ("outline", "border border-primary-500 text-primary-500 hover:bg-primary-50"),
                    ("ghost", "text-primary-500 hover:bg-primary-50"),
                    ("link", "text-primary-500 underline hover:text-primary-600"),
                ],
            ),
            VariantGroup::new(
                "size",
                &[
                    ("xs", "px-2 py-1 text-xs"),
                    ("sm", "px-3 py-1.5 text-sm"),
                    ("md", "px-4 py-2 text-base"),
                    ("lg", "px-5 py-2.5 text-lg"),
                    ("xl", "px-6 py-3 text-xl"),
                ],
            ),
            VariantGroup::new(
                "color",
                &[
                    ("primary", "bg-blue-500 hover:bg-blue-600 text-white"),
                    ("secondary", "bg-gray-500 hover:bg-gray-600 text-white"),
                    ("success", "bg-green-500 hover:bg-green-600 text-white"),
                    ("danger", "bg-red-500 hover:bg-red-600 text-white"),
                    ("warning", "bg-yellow-500 hover:bg-yellow-600 text-white"),
                    ("info", "bg-cyan-500 hover:bg-cyan-600 text-white"),
                ],
            ),
            rounded_group(&["none", "sm", "md", "lg", "full"]),
        ],
    )
}

fn card() -> ComponentDefinition {
    definition(
        "Card",
        "A card component with header, body, and footer sections",
        TemplateKind::Card,
        vec![
            PropDefinition::options(
                "variant",
                "The visual style of the card",
                &["solid", "outline", "elevated"],
                "solid",
            ),
            PropDefinition::options(
                "padding",
                "The padding of the card",
                &["none", "sm", "md", "lg"],
                "md",
            ),
            PropDefinition::options(
                "rounded",
                "The border radius of the card",
                &["none", "sm", "md", "lg"],
                "md",
            ),
            PropDefinition::options(
                "shadow",
                "The shadow of the card",
                &["none", "sm", "md", "lg"],
                "md",
            ),
        ],
        vec![
            VariantGroup::new(
                "variant",
                &[
                    ("solid", "bg-white"),
                    ("outline", "border border-gray-200 bg-white"),
                    ("elevated", "bg-white shadow-md"),
                ],
            ),
            VariantGroup::new(
                "padding",
                &[("none", "p-0"), ("sm", "p-2"), ("md", "p-4"), ("lg", "p-6")],
            ),
            rounded_group(&["none", "sm", "md", "lg"]),
            VariantGroup::new(
                "shadow",
                &[
                    ("none", "shadow-none"),
                    ("sm", "shadow-sm"),
                    ("md", "shadow-md"),
                    ("lg", "shadow-lg"),
                ],
            ),
        ],
    )
}

fn modal() -> ComponentDefinition {
    definition(
        "Modal",
        "A modal dialog component",
        TemplateKind::Modal,
        vec![
            PropDefinition::options(
                "size",
                "The size of the modal",
                &["sm", "md", "lg", "xl", "full"],
                "md",
            ),
            PropDefinition::options(
                "position",
                "The position of the modal",
                &["center", "top", "right", "bottom", "left"],
                "center",
            ),
            PropDefinition::flag(
                "closeOnClickOutside",
                "Whether to close the modal when clicking outside",
                true,
            ),
            PropDefinition::flag(
                "closeOnEsc",
                "Whether to close the modal when pressing Escape",
                true,
            ),
        ],
        vec![
            VariantGroup::new(
                "size",
                &[
                    ("sm", "max-w-sm"),
                    ("md", "max-w-md"),
                    ("lg", "max-w-lg"),
                    ("xl", "max-w-xl"),
                    ("full", "max-w-full"),
                ],
            ),
            VariantGroup::new(
                "position",
                &[
                    ("center", "items-center justify-center"),
                    ("top", "items-start justify-center pt-10"),
                    ("right", "items-center justify-end"),
                    ("bottom", "items-end justify-center pb-10"),
                    ("left", "items-center justify-start"),
                ],
            ),
        ],
    )
}

fn accordion() -> ComponentDefinition {
    definition(
        "Accordion",
        "An accordion component for toggling content visibility",
        TemplateKind::Accordion,
        vec![
            PropDefinition::options(
                "variant",
                "The visual style of the accordion",
                &["solid", "outline", "ghost"],
                "solid",
            ),
            PropDefinition::options(
                "type",
                "The behavior of the accordion",
                &["single", "multiple"],
                "single",
            ),
            PropDefinition::new("defaultValue", PropKind::String, "The default open item(s)")
                .with_default(""),
        ],
        vec![VariantGroup::new(
            "variant",
            &[
                ("solid", "bg-white"),
                ("outline", "border border-gray-200"),
                ("ghost", "bg-transparent"),
            ],
        )],
    )
}

fn tabs() -> ComponentDefinition {
    definition(
        "Tabs",
        "A tabs component for switching between different views",
        TemplateKind::Tabs,
        vec![
            PropDefinition::options(
                "variant",
                "The visual style of the tabs",
                &["solid", "outline", "underline"],
                "solid",
            ),
            PropDefinition::options("size", "The size of the tabs", &["sm", "md", "lg"], "md"),
            PropDefinition::options(
                "orientation",
                "The orientation of the tabs",
                &["horizontal", "vertical"],
                "horizontal",
            ),
            PropDefinition::new("defaultValue", PropKind::String, "The default selected tab")
                .with_default(""),
        ],
        vec![
            VariantGroup::new(
                "variant",
                &[
                    ("solid", "bg-white"),
                    ("outline", "border border-gray-200"),
                    ("underline", "border-b border-gray-200"),
                ],
            ),
            VariantGroup::new(
                "size",
                &[("sm", "text-sm"), ("md", "text-base"), ("lg", "text-lg")],
            ),
            VariantGroup::new(
                "orientation",
                &[("horizontal", "flex-row"), ("vertical", "flex-col")],
            ),
        ],
    )
}

fn sidebar() -> ComponentDefinition {
    definition(
        "Sidebar",
        "A sidebar component for navigation",
        TemplateKind::Sidebar,
        vec![
            PropDefinition::options(
                "position",
                "The position of the sidebar",
                &["left", "right"],
                "left",
            ),
            PropDefinition::options(
                "width",
                "The width of the sidebar",
                &["sm", "md", "lg", "xl"],
                "md",
            ),
            PropDefinition::flag("collapsible", "Whether the sidebar can be collapsed", false),
            PropDefinition::flag("collapsed", "Whether the sidebar is collapsed", false),
        ],
        vec![
            VariantGroup::new("position", &[("left", "left-0"), ("right", "right-0")]),
            VariantGroup::new(
                "width",
                &[("sm", "w-64"), ("md", "w-72"), ("lg", "w-80"), ("xl", "w-96")],
            ),
        ],
    )
}

fn rounded_group(values: &[&str]) -> VariantGroup {
    VariantGroup {
        prop: "rounded".to_string(),
        classes: values
            .iter()
            .map(|v| (v.to_string(), format!("rounded-{}", v)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;
    use crate::value::PropValue;

    #[test]
    fn builtin_registry_passes_validation() {
        let registry = Registry::new(builtin_components(), BreakpointTable::standard());
        assert!(registry.is_ok());
    }

    #[test]
    fn builtin_order_and_shapes() {
        let registry = Registry::builtin();
        let summary: Vec<(&str, Shape)> = registry
            .components()
            .iter()
            .map(|c| (c.identifier.as_str(), c.shape()))
            .collect();
        assert_eq!(
            summary,
            [
                ("Button", Shape::Leaf),
                ("Card", Shape::Container),
                ("Modal", Shape::Container),
                ("Accordion", Shape::Container),
                ("Tabs", Shape::Container),
                ("Sidebar", Shape::Container),
            ]
        );
    }

    #[test]
    fn button_defaults() {
        let registry = Registry::builtin();
        let defaults = registry.lookup("Button").unwrap().defaults();
        assert_eq!(defaults["variant"], PropValue::text("solid"));
        assert_eq!(defaults["size"], PropValue::text("md"));
        assert_eq!(defaults["color"], PropValue::text("primary"));
        assert_eq!(defaults["fullWidth"], PropValue::Bool(false));
    }

    #[test]
    fn rounded_classes_follow_value() {
        let group = rounded_group(&["none", "full"]);
        assert_eq!(group.class_for("full"), Some("rounded-full"));
        assert_eq!(group.class_for("none"), Some("rounded-none"));
    }
}
