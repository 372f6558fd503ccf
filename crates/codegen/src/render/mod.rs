//! Template rendering: resolved props to usage markup and class strings.

pub mod attrs;
pub mod classes;
mod markup;

pub use markup::Placeholder;

use kitforge_core::{BreakpointTable, ComponentDefinition, PropValue};
use serde::Serialize;

use crate::resolve::{PropMap, ResolvedProps};
use crate::templates;

const CLASS_NAME: &str = "className";

/// Markup for one component instance plus the classes its props select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub markup: String,
    pub classes: String,
}

/// The rendering in effect from one breakpoint up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointRendering {
    pub breakpoint: String,
    pub min_width: u32,
    #[serde(flatten)]
    pub rendering: Rendering,
}

/// Renders one component definition.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    definition: &'a ComponentDefinition,
    breakpoints: &'a BreakpointTable,
    placeholder: Placeholder,
}

impl<'a> Renderer<'a> {
    pub fn new(definition: &'a ComponentDefinition, breakpoints: &'a BreakpointTable) -> Self {
        Renderer {
            definition,
            breakpoints,
            placeholder: Placeholder::default(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn definition(&self) -> &'a ComponentDefinition {
        self.definition
    }

    pub fn breakpoints(&self) -> &'a BreakpointTable {
        self.breakpoints
    }

    /// Render an arbitrary prop map.
    pub fn render(&self, props: &PropMap) -> Rendering {
        let attributes = attrs::attributes(self.definition, props);
        Rendering {
            markup: markup::tag(self.definition, &attributes, self.placeholder),
            classes: classes::class_string(self.definition, props),
        }
    }

    pub fn render_base(&self, resolved: &ResolvedProps) -> Rendering {
        self.render(&resolved.base)
    }

    /// Render what a viewport inside `breakpoint` sees: base values plus
    /// every override at or below it.
    ///
    /// `None` when the breakpoint table has no such name.
    pub fn render_at(&self, resolved: &ResolvedProps, breakpoint: &str) -> Option<Rendering> {
        let props = resolved.in_effect_at(breakpoint, self.breakpoints)?;
        Some(self.render(&props))
    }

    /// One rendering per breakpoint that carries overrides, ascending.
    pub fn render_breakpoints(&self, resolved: &ResolvedProps) -> Vec<BreakpointRendering> {
        resolved
            .active_breakpoints(self.breakpoints)
            .into_iter()
            .map(|bp| BreakpointRendering {
                breakpoint: bp.name.clone(),
                min_width: bp.min_width,
                rendering: self.render(&resolved.merged_at(&bp.name)),
            })
            .collect()
    }

    /// A single instance: base attributes plus one `className` holding any
    /// caller-supplied `className` text, the base classes and every active
    /// breakpoint's prefixed override classes.
    pub fn render_merged(&self, resolved: &ResolvedProps) -> Rendering {
        let active = resolved.active_breakpoints(self.breakpoints);
        let overrides = active.iter().filter_map(|bp| {
            resolved
                .overrides
                .get(&bp.name)
                .map(|props| (bp.name.as_str(), props))
        });
        let variant_classes =
            classes::responsive_class_string(self.definition, &resolved.base, overrides);
        let class_list = match resolved.base.get(CLASS_NAME) {
            Some(PropValue::Text(own)) => {
                classes::dedupe_tokens([own.as_str(), variant_classes.as_str()])
            }
            _ => variant_classes,
        };

        let mut base = resolved.base.clone();
        base.remove(CLASS_NAME);
        let mut attributes = attrs::attributes(self.definition, &base);
        if let Some(attr) = attrs::attribute(CLASS_NAME, &PropValue::text(class_list.as_str())) {
            attributes.push(attr);
        }
        Rendering {
            markup: markup::tag(self.definition, &attributes, self.placeholder),
            classes: class_list,
        }
    }

    /// The full component module source for `props`.
    pub fn module_source(&self, props: &PropMap) -> String {
        templates::module_source(self.definition, props)
    }
}
