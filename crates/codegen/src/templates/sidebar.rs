use super::card::section;
use super::{quoted, PropView};

pub(super) fn emit(view: &PropView<'_>, classes: &str) -> String {
    format!(
        r#"import {{ forwardRef, HTMLAttributes, useState }} from "react";
import {{ cn }} from "@/lib/utils";
import {{ ChevronLeft, ChevronRight }} from "lucide-react";

export interface SidebarProps extends HTMLAttributes<HTMLDivElement> {{
  position?: {position_type};
  width?: {width_type};
  collapsible?: boolean;
  collapsed?: boolean;
  onCollapseChange?: (collapsed: boolean) => void;
}}

const Sidebar = forwardRef<HTMLDivElement, SidebarProps>(
  ({{
    className,
    position = {position},
    width = {width},
    collapsible = {collapsible},
    collapsed = {collapsed},
    onCollapseChange,
    children,
    ...props
  }}, ref) => {{
    const [isCollapsed, setIsCollapsed] = useState(collapsed);

    const handleToggleCollapse = () => {{
      const next = !isCollapsed;
      setIsCollapsed(next);
      onCollapseChange?.(next);
    }};

    return (
      <div
        className={{cn(
          "fixed top-0 h-screen bg-white border-r border-gray-200 transition-all duration-300",
          {classes},
          isCollapsed ? "w-16" : undefined,
          className
        )}}
        ref={{ref}}
        {{...props}}
      >
        {{children}}

        {{collapsible && (
          <button
            className="absolute top-4 -right-3 flex items-center justify-center w-6 h-6 rounded-full bg-white border border-gray-200 text-gray-500 hover:text-gray-700"
            onClick={{handleToggleCollapse}}
          >
            {{isCollapsed ? (
              <ChevronRight className="h-4 w-4" />
            ) : (
              <ChevronLeft className="h-4 w-4" />
            )}}
          </button>
        )}}
      </div>
    );
  }}
);

Sidebar.displayName = "Sidebar";

{header}

{content}

{footer}

export {{ Sidebar, SidebarHeader, SidebarContent, SidebarFooter }};"#,
        position_type = view.narrowed("position", "string"),
        width_type = view.narrowed("width", "string"),
        position = view.literal("position"),
        width = view.literal("width"),
        collapsible = view.literal("collapsible"),
        collapsed = view.literal("collapsed"),
        classes = quoted(classes),
        header = section("SidebarHeader", "p-4 border-b border-gray-200"),
        content = section("SidebarContent", "p-4 overflow-y-auto"),
        footer = section("SidebarFooter", "p-4 border-t border-gray-200 mt-auto"),
    )
}
