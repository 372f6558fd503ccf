use super::{quoted, PropView};

pub(super) fn emit(view: &PropView<'_>, classes: &str) -> String {
    format!(
        r#"import {{ forwardRef }} from "react";
import * as TabsPrimitive from "@radix-ui/react-tabs";
import {{ cn }} from "@/lib/utils";

const Tabs = TabsPrimitive.Root;

interface TabsListProps extends React.ComponentPropsWithoutRef<typeof TabsPrimitive.List> {{
  variant?: {variant_type};
  size?: {size_type};
  orientation?: {orientation_type};
}}

const TabsList = forwardRef<
  React.ElementRef<typeof TabsPrimitive.List>,
  TabsListProps
>(({{ className, variant = {variant}, size = {size}, orientation = {orientation}, ...props }}, ref) => (
  <TabsPrimitive.List
    ref={{ref}}
    className={{cn(
      "inline-flex items-center justify-center",
      orientation === "horizontal" ? "flex-row" : "flex-col",
      {classes},
      className
    )}}
    {{...props}}
  />
));
TabsList.displayName = TabsPrimitive.List.displayName;

const TabsTrigger = forwardRef<
  React.ElementRef<typeof TabsPrimitive.Trigger>,
  React.ComponentPropsWithoutRef<typeof TabsPrimitive.Trigger>
>(({{ className, ...props }}, ref) => (
  <TabsPrimitive.Trigger
    ref={{ref}}
    className={{cn(
      "inline-flex items-center justify-center whitespace-nowrap px-3 py-1.5 text-sm font-medium ring-offset-white transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-gray-950 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 data-[state=active]:bg-white data-[state=active]:text-gray-950 data-[state=active]:shadow-sm",
      className
    )}}
    {{...props}}
  />
));
TabsTrigger.displayName = TabsPrimitive.Trigger.displayName;

const TabsContent = forwardRef<
  React.ElementRef<typeof TabsPrimitive.Content>,
  React.ComponentPropsWithoutRef<typeof TabsPrimitive.Content>
>(({{ className, ...props }}, ref) => (
  <TabsPrimitive.Content
    ref={{ref}}
    className={{cn(
      "mt-2 ring-offset-white focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-gray-950 focus-visible:ring-offset-2",
      className
    )}}
    {{...props}}
  />
));
TabsContent.displayName = TabsPrimitive.Content.displayName;

export {{ Tabs, TabsList, TabsTrigger, TabsContent }};"#,
        variant_type = view.narrowed("variant", "string"),
        size_type = view.narrowed("size", "string"),
        orientation_type = view.narrowed("orientation", "string"),
        variant = view.literal("variant"),
        size = view.literal("size"),
        orientation = view.literal("orientation"),
        classes = quoted(classes),
    )
}
