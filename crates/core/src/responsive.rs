//! Breakpoints and per-breakpoint values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A named minimum-width threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub name: String,
    pub min_width: u32,
}

impl Breakpoint {
    pub fn new(name: &str, min_width: u32) -> Self {
        Breakpoint {
            name: name.to_string(),
            min_width,
        }
    }
}

/// Breakpoints in ascending `min_width` order with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    breakpoints: Vec<Breakpoint>,
    default_name: Option<String>,
}

impl BreakpointTable {
    /// Build a table, sorting by width. Names must be unique and widths
    /// distinct so the order is total.
    pub fn new(mut breakpoints: Vec<Breakpoint>) -> Result<Self, CatalogError> {
        breakpoints.sort_by_key(|bp| bp.min_width);
        for (i, bp) in breakpoints.iter().enumerate() {
            if bp.name.is_empty() {
                return Err(CatalogError::invalid("breakpoints", "empty breakpoint name"));
            }
            if breakpoints[..i].iter().any(|b| b.name == bp.name) {
                return Err(CatalogError::invalid(
                    "breakpoints",
                    format!("duplicate breakpoint '{}'", bp.name),
                ));
            }
            if i > 0 && breakpoints[i - 1].min_width == bp.min_width {
                return Err(CatalogError::invalid(
                    "breakpoints",
                    format!(
                        "breakpoints '{}' and '{}' share min width {}",
                        breakpoints[i - 1].name, bp.name, bp.min_width
                    ),
                ));
            }
        }
        Ok(BreakpointTable {
            breakpoints,
            default_name: None,
        })
    }

    /// Mark `name` as the breakpoint a preview starts at.
    pub fn with_default(mut self, name: &str) -> Result<Self, CatalogError> {
        if self.get(name).is_none() {
            return Err(CatalogError::invalid(
                "breakpoints",
                format!("default breakpoint '{}' is not in the table", name),
            ));
        }
        self.default_name = Some(name.to_string());
        Ok(self)
    }

    /// The built-in table: sm 640, md 768, lg 1024, xl 1280, 2xl 1536.
    pub fn standard() -> Self {
        BreakpointTable {
            breakpoints: vec![
                Breakpoint::new("sm", 640),
                Breakpoint::new("md", 768),
                Breakpoint::new("lg", 1024),
                Breakpoint::new("xl", 1280),
                Breakpoint::new("2xl", 1536),
            ],
            default_name: Some("md".to_string()),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.breakpoints.iter().find(|bp| bp.name == name)
    }

    /// Position of `name` in ascending order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.breakpoints.iter().position(|bp| bp.name == name)
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    /// The widest breakpoint whose threshold is at or below `width`.
    /// `None` below the first threshold, where only base values apply.
    pub fn at_width(&self, width: u32) -> Option<&Breakpoint> {
        self.breakpoints
            .iter()
            .take_while(|bp| bp.min_width <= width)
            .last()
    }

    pub fn as_slice(&self) -> &[Breakpoint] {
        &self.breakpoints
    }
}

impl<'a> IntoIterator for &'a BreakpointTable {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.breakpoints.iter()
    }
}

/// A value that is either the same at every breakpoint or set per
/// breakpoint ("from this width up").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveValue<T> {
    Base(T),
    Overrides(BTreeMap<String, T>),
}

impl<T> ResponsiveValue<T> {
    /// A single-breakpoint override.
    pub fn at(breakpoint: &str, value: T) -> Self {
        let mut map = BTreeMap::new();
        map.insert(breakpoint.to_string(), value);
        ResponsiveValue::Overrides(map)
    }

    pub fn is_base(&self) -> bool {
        matches!(self, ResponsiveValue::Base(_))
    }

    /// The value in effect at `breakpoint`.
    ///
    /// `Base` applies everywhere. `Overrides` yields the entry of the
    /// highest known breakpoint at or below `breakpoint`; keys the table
    /// does not know are kept but never chosen.
    pub fn value_at(&self, breakpoint: &str, table: &BreakpointTable) -> Option<&T> {
        match self {
            ResponsiveValue::Base(value) => Some(value),
            ResponsiveValue::Overrides(map) => {
                let limit = table.position(breakpoint)?;
                table.as_slice()[..=limit]
                    .iter()
                    .rev()
                    .find_map(|bp| map.get(&bp.name))
            }
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Base(value)
    }
}

/// Prefix every class token with `breakpoint:`.
pub fn prefix_classes(breakpoint: &str, classes: &str) -> String {
    classes
        .split_whitespace()
        .map(|class| format!("{}:{}", breakpoint, class))
        .collect::<Vec<_>>()
        .join(" ")
}
