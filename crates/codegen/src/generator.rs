//! Session API: look a component up once, edit its props, render it.

use kitforge_core::{BreakpointTable, ComponentDefinition, LookupError, PropValue, Registry, ResponsiveValue};
use serde::Serialize;
use tracing::{debug, warn};

use crate::render::{BreakpointRendering, Placeholder, Renderer, Rendering};
use crate::resolve::ResolvedProps;

/// Entry point over a registry.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'r> {
    registry: &'r Registry,
    placeholder: Placeholder,
}

impl<'r> Generator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Generator {
            registry,
            placeholder: Placeholder::default(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Start a session for `identifier`, seeded with its defaults.
    pub fn session(&self, identifier: &str) -> Result<Session<'r>, LookupError> {
        let definition = self.registry.lookup(identifier)?;
        let renderer =
            Renderer::new(definition, self.registry.breakpoints()).with_placeholder(self.placeholder);
        Ok(Session {
            renderer,
            resolved: ResolvedProps::defaults(definition),
        })
    }
}

/// One component being configured.
#[derive(Debug, Clone)]
pub struct Session<'r> {
    renderer: Renderer<'r>,
    resolved: ResolvedProps,
}

impl<'r> Session<'r> {
    pub fn definition(&self) -> &'r ComponentDefinition {
        self.renderer.definition()
    }

    pub fn resolved(&self) -> &ResolvedProps {
        &self.resolved
    }

    pub fn renderer(&self) -> Renderer<'r> {
        self.renderer
    }

    /// Apply one edit. See [`ResolvedProps::apply`].
    pub fn apply(&mut self, prop: &str, value: impl Into<ResponsiveValue<PropValue>>) -> &mut Self {
        self.resolved.apply(prop, value.into());
        self
    }

    /// Usage markup for the base props.
    pub fn usage(&self) -> Rendering {
        self.renderer.render_base(&self.resolved)
    }

    /// Usage markup at `breakpoint`. `None` for an unknown breakpoint.
    pub fn usage_at(&self, breakpoint: &str) -> Option<Rendering> {
        self.renderer.render_at(&self.resolved, breakpoint)
    }

    /// Module source for the base props.
    pub fn module_source(&self) -> String {
        self.renderer.module_source(&self.resolved.base)
    }

    /// Module source for the props in effect at `breakpoint`.
    pub fn module_source_at(&self, breakpoint: &str) -> Option<String> {
        let props = self.resolved.in_effect_at(breakpoint, self.breakpoints())?;
        Some(self.renderer.module_source(&props))
    }

    /// Base rendering, one rendering per overridden breakpoint, and the
    /// merged single-instance form.
    pub fn responsive(&self) -> ResponsiveOutput {
        let ignored: Vec<String> = self
            .resolved
            .unknown_breakpoints(self.breakpoints())
            .into_iter()
            .map(str::to_string)
            .collect();
        if !ignored.is_empty() {
            warn!(
                component = %self.definition().identifier,
                breakpoints = ?ignored,
                "overrides for unknown breakpoints are ignored"
            );
        }
        let output = ResponsiveOutput {
            component: self.definition().identifier.clone(),
            base: self.renderer.render_base(&self.resolved),
            breakpoints: self.renderer.render_breakpoints(&self.resolved),
            merged: self.renderer.render_merged(&self.resolved),
            ignored,
        };
        debug!(
            component = %output.component,
            breakpoints = output.breakpoints.len(),
            "responsive rendering"
        );
        output
    }

    fn breakpoints(&self) -> &'r BreakpointTable {
        self.renderer.breakpoints()
    }
}

/// Everything the responsive mode produces for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsiveOutput {
    pub component: String,
    pub base: Rendering,
    pub breakpoints: Vec<BreakpointRendering>,
    pub merged: Rendering,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
}

impl ResponsiveOutput {
    /// Plain-text layout: base, each breakpoint, then the merged form.
    pub fn to_text(&self) -> String {
        let mut out = String::from("// Base\n");
        out.push_str(&self.base.markup);
        for bp in &self.breakpoints {
            out.push_str(&format!(
                "\n\n// {} and up (min-width: {}px)\n{}",
                bp.breakpoint, bp.min_width, bp.rendering.markup
            ));
        }
        out.push_str(&format!(
            "\n\n// Responsive variants for {}\n{}",
            self.component, self.merged.markup
        ));
        out
    }
}
