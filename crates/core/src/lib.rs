//! kitforge-core: the component catalog.
//!
//! Holds the data model a generator works from: component definitions with
//! their props schema and variant class tables, the breakpoint table and
//! responsive values, and the immutable [`Registry`] that owns them.
//!
//! # Public API
//!
//! - [`Registry`] -- built-in or catalog-loaded component registry
//! - [`ComponentDefinition`], [`PropDefinition`], [`VariantGroup`],
//!   [`TemplateKind`] -- the component schema
//! - [`PropValue`] -- runtime prop values
//! - [`BreakpointTable`], [`ResponsiveValue`] -- the responsive model
//! - [`Catalog`] -- JSON catalog files
//! - [`LookupError`], [`CatalogError`] -- errors

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod model;
pub mod registry;
pub mod responsive;
pub mod value;

// ── Convenience re-exports ───────────────────────────────────────────

pub use catalog::{load_registry, Catalog, CATALOG_SCHEMA};
pub use error::{CatalogError, LookupError};
pub use model::{ComponentDefinition, PropDefinition, PropKind, Shape, TemplateKind, VariantGroup};
pub use registry::Registry;
pub use responsive::{prefix_classes, Breakpoint, BreakpointTable, ResponsiveValue};
pub use value::PropValue;
