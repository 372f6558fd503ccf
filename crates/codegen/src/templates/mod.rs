//! Component module source generation.
//!
//! Each built-in template emits a complete TypeScript/React module whose
//! prop types and defaults reflect the resolved values and whose root
//! element carries the resolved class string.

mod accordion;
mod button;
mod card;
mod custom;
mod modal;
mod sidebar;
mod tabs;

use kitforge_core::{ComponentDefinition, PropValue, TemplateKind};

use crate::render::classes::class_string;
use crate::resolve::PropMap;

/// Emit the module source for `definition` with `props`.
pub fn module_source(definition: &ComponentDefinition, props: &PropMap) -> String {
    let classes = class_string(definition, props);
    let view = PropView { props };
    match definition.template {
        TemplateKind::Button => button::emit(&view, &classes),
        TemplateKind::Card => card::emit(&view, &classes),
        TemplateKind::Modal => modal::emit(&view, &classes),
        TemplateKind::Accordion => accordion::emit(&view, &classes),
        TemplateKind::Tabs => tabs::emit(&view, &classes),
        TemplateKind::Sidebar => sidebar::emit(&view, &classes),
        TemplateKind::Custom { container } => custom::emit(definition, &view, &classes, container),
    }
}

/// A TypeScript double-quoted string literal.
fn quoted(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Read access to resolved props in the forms templates interpolate.
struct PropView<'a> {
    props: &'a PropMap,
}

impl PropView<'_> {
    /// TypeScript expression for a default: the literal, or `undefined`.
    fn literal(&self, name: &str) -> String {
        self.props
            .get(name)
            .map_or_else(|| "undefined".to_string(), PropValue::to_literal)
    }

    /// TypeScript type narrowed to the current value, or `fallback` when the
    /// prop has no usable value.
    fn narrowed(&self, name: &str, fallback: &str) -> String {
        match self.props.get(name) {
            Some(value @ PropValue::Text(s)) if !s.is_empty() => value.to_literal(),
            Some(PropValue::Number(n)) => n.to_string(),
            _ => fallback.to_string(),
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.props.get(name).and_then(PropValue::as_bool).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitforge_core::Registry;

    fn defaults(identifier: &str) -> (ComponentDefinition, PropMap) {
        let registry = Registry::builtin();
        let def = registry.lookup(identifier).unwrap().clone();
        let props = def.defaults();
        (def, props)
    }

    #[test]
    fn every_builtin_emits_its_exports() {
        let expectations = [
            ("Button", "export { Button };"),
            ("Card", "export { Card, CardHeader, CardBody, CardFooter };"),
            ("Modal", "DialogDescription,\n};"),
            ("Accordion", "export { Accordion, AccordionItem, AccordionTrigger, AccordionContent };"),
            ("Tabs", "export { Tabs, TabsList, TabsTrigger, TabsContent };"),
            ("Sidebar", "export { Sidebar, SidebarHeader, SidebarContent, SidebarFooter };"),
        ];
        for (identifier, export) in expectations {
            let (def, props) = defaults(identifier);
            let source = module_source(&def, &props);
            assert!(
                source.ends_with(export),
                "{} module should end with its export list",
                identifier
            );
        }
    }

    #[test]
    fn view_literals() {
        let mut props = PropMap::new();
        props.insert("size".to_string(), PropValue::text("md"));
        props.insert("blank".to_string(), PropValue::text(""));
        props.insert("open".to_string(), PropValue::Bool(true));
        let view = PropView { props: &props };
        assert_eq!(view.literal("size"), "\"md\"");
        assert_eq!(view.literal("missing"), "undefined");
        assert_eq!(view.narrowed("size", "string"), "\"md\"");
        assert_eq!(view.narrowed("blank", "string"), "string");
        assert!(view.flag("open"));
        assert!(!view.flag("missing"));
    }

    #[test]
    fn quoted_escapes() {
        assert_eq!(quoted("px-4 py-2"), "\"px-4 py-2\"");
        assert_eq!(quoted("a\"b"), "\"a\\\"b\"");
    }
}
