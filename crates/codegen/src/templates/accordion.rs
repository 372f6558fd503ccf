use super::{quoted, PropView};

pub(super) fn emit(view: &PropView<'_>, classes: &str) -> String {
    format!(
        r#"import {{ forwardRef }} from "react";
import * as AccordionPrimitive from "@radix-ui/react-accordion";
import {{ ChevronDown }} from "lucide-react";
import {{ cn }} from "@/lib/utils";

const Accordion = AccordionPrimitive.Root;

export const accordionDefaults = {{
  type: {kind},
  defaultValue: {default_value},
}} as const;

interface AccordionItemProps extends React.ComponentPropsWithoutRef<typeof AccordionPrimitive.Item> {{
  variant?: {variant_type};
}}

const AccordionItem = forwardRef<
  React.ElementRef<typeof AccordionPrimitive.Item>,
  AccordionItemProps
>(({{ className, variant = {variant}, ...props }}, ref) => (
  <AccordionPrimitive.Item
    ref={{ref}}
    className={{cn(
      {classes},
      className
    )}}
    {{...props}}
  />
));
AccordionItem.displayName = "AccordionItem";

const AccordionTrigger = forwardRef<
  React.ElementRef<typeof AccordionPrimitive.Trigger>,
  React.ComponentPropsWithoutRef<typeof AccordionPrimitive.Trigger>
>(({{ className, children, ...props }}, ref) => (
  <AccordionPrimitive.Header className="flex">
    <AccordionPrimitive.Trigger
      ref={{ref}}
      className={{cn(
        "flex flex-1 items-center justify-between py-4 px-4 font-medium transition-all hover:underline [&[data-state=open]>svg]:rotate-180",
        className
      )}}
      {{...props}}
    >
      {{children}}
      <ChevronDown className="h-4 w-4 shrink-0 transition-transform duration-200" />
    </AccordionPrimitive.Trigger>
  </AccordionPrimitive.Header>
));
AccordionTrigger.displayName = AccordionPrimitive.Trigger.displayName;

const AccordionContent = forwardRef<
  React.ElementRef<typeof AccordionPrimitive.Content>,
  React.ComponentPropsWithoutRef<typeof AccordionPrimitive.Content>
>(({{ className, children, ...props }}, ref) => (
  <AccordionPrimitive.Content
    ref={{ref}}
    className={{cn(
      "overflow-hidden px-4 text-sm transition-all data-[state=closed]:animate-accordion-up data-[state=open]:animate-accordion-down",
      className
    )}}
    {{...props}}
  >
    <div className="pb-4 pt-0">{{children}}</div>
  </AccordionPrimitive.Content>
));
AccordionContent.displayName = AccordionPrimitive.Content.displayName;

export {{ Accordion, AccordionItem, AccordionTrigger, AccordionContent }};"#,
        kind = view.literal("type"),
        default_value = view.literal("defaultValue"),
        variant_type = view.narrowed("variant", "string"),
        variant = view.literal("variant"),
        classes = quoted(classes),
    )
}

#[cfg(test)]
mod tests {
    use crate::templates::module_source;
    use kitforge_core::{PropValue, Registry};

    #[test]
    fn root_defaults_carry_behavior() {
        let registry = Registry::builtin();
        let accordion = registry.lookup("Accordion").unwrap();
        let mut props = accordion.defaults();
        props.insert("type".to_string(), PropValue::text("multiple"));
        props.insert("variant".to_string(), PropValue::text("outline"));
        let source = module_source(accordion, &props);
        assert!(source.contains("  type: \"multiple\",\n  defaultValue: \"\",\n"));
        assert!(source.contains("      \"border border-gray-200\",\n"));
    }
}
