//! Ratio registry for discovery and introspection.
//!
//! The registry holds the ratios the engine computes, in display order, and
//! supports grouping by category.

use crate::{Metric, Ratio, rows::CanonicalRow};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ratio category; one axis of the composite score.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatioCategory {
    /// Liquidity - ability to meet short-term obligations
    Liquidity,
    /// Efficiency - how well assets generate revenue
    Efficiency,
    /// Profitability - earnings relative to revenue, equity and assets
    Profitability,
    /// Solvency - reliance on debt financing
    Solvency,
}

impl RatioCategory {
    /// Every category in composite-axis order.
    pub const ALL: [Self; 4] = [
        Self::Liquidity,
        Self::Efficiency,
        Self::Profitability,
        Self::Solvency,
    ];
}

/// Metadata for ratio introspection.
#[derive(Debug, Clone, Serialize)]
pub struct RatioInfo {
    /// Metric produced
    pub metric: Metric,
    /// Ratio name (unique identifier)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Formula as shown in reports
    pub formula: String,
    /// Ratio category
    pub category: RatioCategory,
    /// Canonical rows read
    pub required_rows: Vec<CanonicalRow>,
}

/// Registry of the ratios to compute, in display order.
#[derive(Debug, Clone, Default)]
pub struct RatioRegistry {
    ratios: Vec<Arc<dyn Ratio>>,
}

impl RatioRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { ratios: Vec::new() }
    }

    /// Register the nine standard ratios.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Liquidity
        registry.register(Arc::new(crate::liquidity::CurrentRatio));
        registry.register(Arc::new(crate::liquidity::QuickRatio));

        // Efficiency
        registry.register(Arc::new(crate::efficiency::CurrentAssetTurnover));
        registry.register(Arc::new(crate::efficiency::TotalAssetTurnover));
        registry.register(Arc::new(crate::efficiency::DaysSalesOutstanding::default()));

        // Profitability and solvency, interleaved as in reports
        registry.register(Arc::new(crate::profitability::ProfitMargin));
        registry.register(Arc::new(crate::solvency::DebtRatio));
        registry.register(Arc::new(crate::profitability::ReturnOnEquity));
        registry.register(Arc::new(crate::profitability::BasicEarningPower));

        registry
    }

    /// Register a ratio, replacing any ratio producing the same metric.
    pub fn register(&mut self, ratio: Arc<dyn Ratio>) {
        match self.ratios.iter().position(|r| r.metric() == ratio.metric()) {
            Some(index) => self.ratios[index] = ratio,
            None => self.ratios.push(ratio),
        }
    }

    /// Get the ratio producing `metric`.
    pub fn get(&self, metric: Metric) -> Option<&dyn Ratio> {
        self.ratios
            .iter()
            .find(|r| r.metric() == metric)
            .map(|r| r.as_ref())
    }

    /// Get ratios by category.
    pub fn by_category(&self, category: RatioCategory) -> Vec<&dyn Ratio> {
        self.ratios
            .iter()
            .filter(|r| r.category() == category)
            .map(|r| r.as_ref())
            .collect()
    }

    /// Iterate ratios in display order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Ratio> + '_ {
        self.ratios.iter().map(|r| r.as_ref())
    }

    /// Get all ratio metadata.
    pub fn all_info(&self) -> Vec<RatioInfo> {
        self.iter()
            .map(|r| RatioInfo {
                metric: r.metric(),
                name: r.name().to_string(),
                description: r.description().to_string(),
                formula: r.formula().to_string(),
                category: r.category(),
                required_rows: r.required_rows().to_vec(),
            })
            .collect()
    }

    /// Number of registered ratios.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}
