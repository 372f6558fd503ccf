//! Usage markup: the component tag with its attributes.

use kitforge_core::{ComponentDefinition, Shape, TemplateKind};

/// What goes between the opening and closing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placeholder {
    /// A `{/* Component content */}` comment.
    #[default]
    Comment,
    /// Example children for the component.
    Sample,
}

const CONTENT_COMMENT: &str = "{/* Component content */}";

/// Lay out a tag: one attribute per line, then the terminator.
pub(crate) fn tag(definition: &ComponentDefinition, attributes: &[String], placeholder: Placeholder) -> String {
    let name = definition.identifier.as_str();
    let mut code = format!("<{}", name);
    for attr in attributes {
        code.push_str("\n  ");
        code.push_str(attr);
    }

    match (definition.shape(), placeholder) {
        (Shape::Container, _) => {
            let children = match placeholder {
                Placeholder::Comment => CONTENT_COMMENT,
                Placeholder::Sample => sample_children(definition.template),
            };
            code.push_str("\n>");
            for line in children.lines() {
                code.push_str("\n  ");
                code.push_str(line);
            }
            code.push_str(&format!("\n</{}>", name));
        }
        (Shape::Leaf, Placeholder::Sample) if definition.template == TemplateKind::Button => {
            code.push_str(&format!("\n>Click me</{}>", name));
        }
        (Shape::Leaf, _) => code.push_str("\n/>"),
    }
    code
}

fn sample_children(template: TemplateKind) -> &'static str {
    match template {
        TemplateKind::Card => {
            r#"<CardHeader>
  <h3 className="text-lg font-semibold">Card title</h3>
</CardHeader>
<CardBody>
  <p>Card content</p>
</CardBody>
<CardFooter>
  <p className="text-sm text-gray-400">Card footer</p>
</CardFooter>"#
        }
        TemplateKind::Modal => {
            r#"<DialogHeader>
  <DialogTitle>Dialog title</DialogTitle>
  <DialogDescription>
    Dialog description
  </DialogDescription>
</DialogHeader>
<div className="py-4">
  <p>Dialog content</p>
</div>
<DialogFooter>
  <Button variant="outline" color="secondary">Cancel</Button>
  <Button variant="solid" color="primary">Save</Button>
</DialogFooter>"#
        }
        TemplateKind::Accordion => {
            r#"<AccordionItem value="item-1">
  <AccordionTrigger>Section 1</AccordionTrigger>
  <AccordionContent>
    Section 1 content
  </AccordionContent>
</AccordionItem>
<AccordionItem value="item-2">
  <AccordionTrigger>Section 2</AccordionTrigger>
  <AccordionContent>
    Section 2 content
  </AccordionContent>
</AccordionItem>"#
        }
        TemplateKind::Tabs => {
            r#"<TabsList>
  <TabsTrigger value="tab1">Tab 1</TabsTrigger>
  <TabsTrigger value="tab2">Tab 2</TabsTrigger>
  <TabsTrigger value="tab3">Tab 3</TabsTrigger>
</TabsList>
<TabsContent value="tab1">Tab 1 content</TabsContent>
<TabsContent value="tab2">Tab 2 content</TabsContent>
<TabsContent value="tab3">Tab 3 content</TabsContent>"#
        }
        TemplateKind::Sidebar => {
            r##"<SidebarHeader>
  <h3 className="font-semibold">Sidebar title</h3>
</SidebarHeader>
<SidebarContent>
  <nav className="space-y-2">
    <a href="#" className="block p-2 hover:bg-gray-700 rounded">Home</a>
    <a href="#" className="block p-2 hover:bg-gray-700 rounded">Dashboard</a>
    <a href="#" className="block p-2 hover:bg-gray-700 rounded">Settings</a>
  </nav>
</SidebarContent>
<SidebarFooter>
  <p className="text-sm text-gray-400">Footer</p>
</SidebarFooter>"##
        }
        TemplateKind::Button | TemplateKind::Custom { .. } => CONTENT_COMMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitforge_core::Registry;

    #[test]
    fn leaf_self_closes() {
        let registry = Registry::builtin();
        let button = registry.lookup("Button").unwrap();
        let code = tag(button, &[r#"size="md""#.to_string()], Placeholder::Comment);
        assert_eq!(code, "<Button\n  size=\"md\"\n/>");
    }

    #[test]
    fn container_wraps_placeholder() {
        let registry = Registry::builtin();
        let card = registry.lookup("Card").unwrap();
        let code = tag(card, &[], Placeholder::Comment);
        assert_eq!(code, "<Card\n>\n  {/* Component content */}\n</Card>");
    }

    #[test]
    fn samples_are_indented() {
        let registry = Registry::builtin();
        let tabs = registry.lookup("Tabs").unwrap();
        let code = tag(tabs, &[], Placeholder::Sample);
        assert!(code.contains("\n  <TabsList>\n    <TabsTrigger value=\"tab1\">"));
        assert!(code.ends_with("\n</Tabs>"));

        let button = registry.lookup("Button").unwrap();
        assert_eq!(tag(button, &[], Placeholder::Sample), "<Button\n>Click me</Button>");
    }
}
