use super::{quoted, PropView};

pub(super) fn emit(view: &PropView<'_>, classes: &str) -> String {
    format!(
        r#"import {{ HTMLAttributes, forwardRef }} from "react";
import {{ cn }} from "@/lib/utils";

export interface CardProps extends HTMLAttributes<HTMLDivElement> {{
  variant?: {variant_type};
  padding?: {padding_type};
  rounded?: {rounded_type};
  shadow?: {shadow_type};
}}

const Card = forwardRef<HTMLDivElement, CardProps>(
  ({{ className, variant = {variant}, padding = {padding}, rounded = {rounded}, shadow = {shadow}, ...props }}, ref) => {{
    return (
      <div
        className={{cn(
          {classes},
          className
        )}}
        ref={{ref}}
        {{...props}}
      />
    );
  }}
);

Card.displayName = "Card";

{header}

{body}

{footer}

export {{ Card, CardHeader, CardBody, CardFooter }};"#,
        variant_type = view.narrowed("variant", "string"),
        padding_type = view.narrowed("padding", "string"),
        rounded_type = view.narrowed("rounded", "string"),
        shadow_type = view.narrowed("shadow", "string"),
        variant = view.literal("variant"),
        padding = view.literal("padding"),
        rounded = view.literal("rounded"),
        shadow = view.literal("shadow"),
        classes = quoted(classes),
        header = section("CardHeader", "px-4 py-3 border-b border-gray-200"),
        body = section("CardBody", "px-4 py-3"),
        footer = section("CardFooter", "px-4 py-3 border-t border-gray-200"),
    )
}

/// A plain `div` sub-component with fixed classes.
pub(super) fn section(name: &str, classes: &str) -> String {
    format!(
        r#"const {name} = forwardRef<HTMLDivElement, HTMLAttributes<HTMLDivElement>>(
  ({{ className, ...props }}, ref) => {{
    return (
      <div
        className={{cn({classes}, className)}}
        ref={{ref}}
        {{...props}}
      />
    );
  }}
);

{name}.displayName = "{name}";"#,
        name = name,
        classes = quoted(classes),
    )
}
