use super::{quoted, PropView};
use crate::render::classes::normalize;

pub(super) fn emit(view: &PropView<'_>, classes: &str) -> String {
    let mut root = classes.to_string();
    if view.flag("fullWidth") {
        root.push_str(" w-full");
    }
    if view.flag("disabled") {
        root.push_str(" opacity-50 cursor-not-allowed");
    }

    format!(
        r#"import {{ ButtonHTMLAttributes, forwardRef }} from "react";
import {{ cn }} from "@/lib/utils";

export interface ButtonProps extends ButtonHTMLAttributes<HTMLButtonElement> {{
  variant?: {variant_type};
  size?: {size_type};
  color?: {color_type};
  rounded?: {rounded_type};
  fullWidth?: boolean;
}}

const Button = forwardRef<HTMLButtonElement, ButtonProps>(
  ({{ className, variant = {variant}, size = {size}, color = {color}, rounded = {rounded}, fullWidth = {full_width}, ...props }}, ref) => {{
    return (
      <button
        className={{cn(
          {classes},
          fullWidth && "w-full",
          className
        )}}
        ref={{ref}}
        {{...props}}
      />
    );
  }}
);

Button.displayName = "Button";

export {{ Button }};"#,
        variant_type = view.narrowed("variant", "string"),
        size_type = view.narrowed("size", "string"),
        color_type = view.narrowed("color", "string"),
        rounded_type = view.narrowed("rounded", "string"),
        variant = view.literal("variant"),
        size = view.literal("size"),
        color = view.literal("color"),
        rounded = view.literal("rounded"),
        full_width = view.literal("fullWidth"),
        classes = quoted(&normalize(&root)),
    )
}

#[cfg(test)]
mod tests {
    use crate::resolve::PropMap;
    use crate::templates::module_source;
    use kitforge_core::{PropValue, Registry};

    #[test]
    fn flags_extend_root_classes() {
        let registry = Registry::builtin();
        let button = registry.lookup("Button").unwrap();
        let mut props = button.defaults();
        props.insert("fullWidth".to_string(), PropValue::Bool(true));
        props.insert("disabled".to_string(), PropValue::Bool(true));
        let source = module_source(button, &props);
        assert!(source.contains(
            "\"bg-primary-500 text-white hover:bg-primary-600 px-4 py-2 text-base bg-blue-500 hover:bg-blue-600 text-white rounded-md w-full opacity-50 cursor-not-allowed\","
        ));
        assert!(source.contains("fullWidth = true"));
    }

    #[test]
    fn missing_values_widen_types() {
        let registry = Registry::builtin();
        let button = registry.lookup("Button").unwrap();
        let source = module_source(button, &PropMap::new());
        assert!(source.contains("  variant?: string;\n"));
        assert!(source.contains("variant = undefined"));
        assert!(source.contains("        className={cn(\n          \"\",\n"));
    }
}
