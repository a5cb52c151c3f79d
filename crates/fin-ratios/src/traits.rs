//! Core trait definitions for ratios.
//!
//! Every ratio implements [`Ratio`], which turns the engine's working frame of
//! canonical rows into one polars expression evaluated across all aligned
//! periods at once.

use crate::{Metric, registry::RatioCategory, rows::CanonicalRow};
use polars::prelude::Expr;
use std::collections::BTreeMap;

/// The canonical rows resolved directly from the statements, with the vendor
/// label each one matched.
///
/// Rows the engine derives (total liabilities, EBIT) are always present as
/// columns in the working frame, but only appear here when they were read
/// from a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInputs {
    resolved: BTreeMap<CanonicalRow, String>,
}

impl RowInputs {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `row` was resolved through `label`.
    pub fn insert(&mut self, row: CanonicalRow, label: impl Into<String>) {
        self.resolved.insert(row, label.into());
    }

    /// Whether `row` was resolved directly.
    pub fn contains(&self, row: CanonicalRow) -> bool {
        self.resolved.contains_key(&row)
    }

    /// The vendor label `row` was resolved through.
    pub fn label(&self, row: CanonicalRow) -> Option<&str> {
        self.resolved.get(&row).map(String::as_str)
    }

    /// Resolved rows and their labels in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalRow, &str)> + '_ {
        self.resolved.iter().map(|(row, label)| (*row, label.as_str()))
    }
}

/// A ratio derived from canonical statement rows.
pub trait Ratio: Send + Sync + std::fmt::Debug {
    /// Which metric this ratio produces.
    fn metric(&self) -> Metric;

    /// Unique snake_case identifier.
    fn name(&self) -> &str {
        self.metric().name()
    }

    /// Human-readable description of what this ratio measures.
    fn description(&self) -> &str;

    /// Formula as shown in reports.
    fn formula(&self) -> &str;

    /// Category for grouping and scoring.
    fn category(&self) -> RatioCategory {
        self.metric().category()
    }

    /// Canonical rows the expression reads in the common case.
    fn required_rows(&self) -> &[CanonicalRow];

    /// Expression over the engine's working frame.
    ///
    /// `inputs` tells which optional rows were resolved, so implementations can
    /// pick their fallback policy.
    fn expr(&self, inputs: &RowInputs) -> Expr;
}

/// Marker trait for ratio configuration types.
pub trait RatioConfig: Default + Clone + Send + Sync + std::fmt::Debug {}

/// A ratio that supports runtime configuration.
pub trait ConfigurableRatio: Ratio {
    /// Configuration type for this ratio.
    type Config: RatioConfig;

    /// Create a new ratio with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Returns the current configuration.
    fn config(&self) -> &Self::Config;
}

impl<T: Default + Clone + Send + Sync + std::fmt::Debug> RatioConfig for T {}
