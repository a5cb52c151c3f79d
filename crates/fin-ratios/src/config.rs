//! Analysis configuration.
//!
//! Fixed reference data (the company dictionary and industry baselines) is
//! loaded once and passed into the pipeline instead of living in globals.

use crate::{IndustryBaseline, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// Default number of fiscal years to analyze.
pub const DEFAULT_LOOKBACK_YEARS: usize = 5;

/// Process-wide, read-only analysis settings.
///
/// Every field is optional in JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of most recent fiscal years to keep after alignment
    pub lookback_years: usize,
    /// Benchmark values for comparison and scoring
    pub baseline: IndustryBaseline,
    /// Ticker to company name
    pub companies: BTreeMap<String, String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let companies = [
            ("AAPL", "Apple Inc."),
            ("MSFT", "Microsoft Corporation"),
            ("GOOGL", "Alphabet Inc."),
            ("AMZN", "Amazon.com, Inc."),
            ("META", "Meta Platforms, Inc."),
            ("TSLA", "Tesla, Inc."),
            ("NVDA", "NVIDIA Corporation"),
            ("JPM", "JPMorgan Chase & Co."),
            ("WMT", "Walmart Inc."),
            ("KO", "The Coca-Cola Company"),
        ]
        .into_iter()
        .map(|(ticker, name)| (ticker.to_string(), name.to_string()))
        .collect();

        Self {
            lookback_years: DEFAULT_LOOKBACK_YEARS,
            baseline: IndustryBaseline::default(),
            companies,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Company name for `ticker`, matched case-insensitively.
    pub fn company_name(&self, ticker: &str) -> Option<&str> {
        self.companies
            .get(&ticker.to_uppercase())
            .map(String::as_str)
    }
}
