use super::{quoted, PropView};

const OVERLAY_CLASSES: &str = "fixed inset-0 z-50 bg-black/50 backdrop-blur-sm data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";

const CONTENT_CLASSES: &str = "fixed z-50 grid w-full gap-4 bg-white p-6 shadow-lg duration-200 data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95 data-[state=closed]:slide-out-to-left-1/2 data-[state=closed]:slide-out-to-top-[48%] data-[state=open]:slide-in-from-left-1/2 data-[state=open]:slide-in-from-top-[48%] sm:rounded-lg";

const CLOSE_CLASSES: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-white transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-gray-950 focus:ring-offset-2 disabled:pointer-events-none data-[state=open]:bg-gray-100 data-[state=open]:text-gray-500";

pub(super) fn emit(view: &PropView<'_>, classes: &str) -> String {
    format!(
        r#"import {{ forwardRef, HTMLAttributes }} from "react";
import * as DialogPrimitive from "@radix-ui/react-dialog";
import {{ X }} from "lucide-react";
import {{ cn }} from "@/lib/utils";

const Dialog = DialogPrimitive.Root;
const DialogTrigger = DialogPrimitive.Trigger;
const DialogPortal = DialogPrimitive.Portal;
const DialogClose = DialogPrimitive.Close;

const DialogOverlay = forwardRef<
  React.ElementRef<typeof DialogPrimitive.Overlay>,
  React.ComponentPropsWithoutRef<typeof DialogPrimitive.Overlay>
>(({{ className, ...props }}, ref) => (
  <DialogPrimitive.Overlay
    ref={{ref}}
    className={{cn(
      "{overlay}",
      className
    )}}
    {{...props}}
  />
));
DialogOverlay.displayName = DialogPrimitive.Overlay.displayName;

interface DialogContentProps extends React.ComponentPropsWithoutRef<typeof DialogPrimitive.Content> {{
  size?: {size_type};
  position?: {position_type};
  closeOnClickOutside?: boolean;
  closeOnEsc?: boolean;
}}

const DialogContent = forwardRef<
  React.ElementRef<typeof DialogPrimitive.Content>,
  DialogContentProps
>(({{ className, size = {size}, position = {position}, closeOnClickOutside = {click_outside}, closeOnEsc = {esc}, children, ...props }}, ref) => (
  <DialogPortal>
    <DialogOverlay />
    <DialogPrimitive.Content
      ref={{ref}}
      className={{cn(
        "{content}",
        {classes},
        className
      )}}
      onPointerDownOutside={{(event) => {{
        if (!closeOnClickOutside) event.preventDefault();
      }}}}
      onEscapeKeyDown={{(event) => {{
        if (!closeOnEsc) event.preventDefault();
      }}}}
      {{...props}}
    >
      {{children}}
      <DialogPrimitive.Close className="{close}">
        <X className="h-4 w-4" />
        <span className="sr-only">Close</span>
      </DialogPrimitive.Close>
    </DialogPrimitive.Content>
  </DialogPortal>
));
DialogContent.displayName = DialogPrimitive.Content.displayName;

const DialogHeader = ({{
  className,
  ...props
}}: HTMLAttributes<HTMLDivElement>) => (
  <div
    className={{cn(
      "flex flex-col space-y-1.5 text-center sm:text-left",
      className
    )}}
    {{...props}}
  />
);
DialogHeader.displayName = "DialogHeader";

const DialogFooter = ({{
  className,
  ...props
}}: HTMLAttributes<HTMLDivElement>) => (
  <div
    className={{cn(
      "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2",
      className
    )}}
    {{...props}}
  />
);
DialogFooter.displayName = "DialogFooter";

const DialogTitle = forwardRef<
  React.ElementRef<typeof DialogPrimitive.Title>,
  React.ComponentPropsWithoutRef<typeof DialogPrimitive.Title>
>(({{ className, ...props }}, ref) => (
  <DialogPrimitive.Title
    ref={{ref}}
    className={{cn(
      "text-lg font-semibold leading-none tracking-tight",
      className
    )}}
    {{...props}}
  />
));
DialogTitle.displayName = DialogPrimitive.Title.displayName;

const DialogDescription = forwardRef<
  React.ElementRef<typeof DialogPrimitive.Description>,
  React.ComponentPropsWithoutRef<typeof DialogPrimitive.Description>
>(({{ className, ...props }}, ref) => (
  <DialogPrimitive.Description
    ref={{ref}}
    className={{cn("text-sm text-gray-500", className)}}
    {{...props}}
  />
));
DialogDescription.displayName = DialogPrimitive.Description.displayName;

export {{
  Dialog,
  DialogPortal,
  DialogOverlay,
  DialogTrigger,
  DialogClose,
  DialogContent,
  DialogHeader,
  DialogFooter,
  DialogTitle,
  DialogDescription,
}};"#,
        overlay = OVERLAY_CLASSES,
        content = CONTENT_CLASSES,
        close = CLOSE_CLASSES,
        size_type = view.narrowed("size", "string"),
        position_type = view.narrowed("position", "string"),
        size = view.literal("size"),
        position = view.literal("position"),
        click_outside = view.literal("closeOnClickOutside"),
        esc = view.literal("closeOnEsc"),
        classes = quoted(classes),
    )
}

#[cfg(test)]
mod tests {
    use crate::templates::module_source;
    use kitforge_core::{PropValue, Registry};

    #[test]
    fn dismissal_flags_become_defaults() {
        let registry = Registry::builtin();
        let modal = registry.lookup("Modal").unwrap();
        let mut props = modal.defaults();
        props.insert("closeOnEsc".to_string(), PropValue::Bool(false));
        props.insert("size".to_string(), PropValue::text("xl"));
        let source = module_source(modal, &props);
        assert!(source.contains("closeOnClickOutside = true, closeOnEsc = false"));
        assert!(source.contains("  size?: \"xl\";\n"));
        assert!(source.contains("        \"max-w-xl"));
    }
}
