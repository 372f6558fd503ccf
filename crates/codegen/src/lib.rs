//! kitforge-codegen: prop resolution and code generation.
//!
//! Turns a [`ComponentDefinition`](kitforge_core::ComponentDefinition) plus
//! user edits into usage markup, class strings, responsive renderings and
//! full component module source.
//!
//! # Public API
//!
//! - [`resolve`], [`ResolvedProps`] -- defaults plus base and breakpoint edits
//! - [`Renderer`] -- usage markup and class strings for one definition
//! - [`module_source`] -- the component's TypeScript/React module
//! - [`Generator`], [`Session`] -- lookup plus edit plus render in one place

pub mod generator;
pub mod render;
pub mod resolve;
pub mod templates;

// ── Convenience re-exports ───────────────────────────────────────────

pub use generator::{Generator, ResponsiveOutput, Session};
pub use render::{BreakpointRendering, Placeholder, Renderer, Rendering};
pub use resolve::{resolve, PropMap, ResolvedProps};
pub use templates::module_source;
