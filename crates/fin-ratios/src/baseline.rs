//! Industry baseline values.

use crate::{Metric, metrics::RatioSnapshot};
use serde::{Deserialize, Serialize};

/// Representative benchmark value per metric.
///
/// The defaults are fixed constants standing in for a real benchmark source.
/// Any subset can be overridden through [`crate::AnalysisConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryBaseline {
    /// Current ratio benchmark
    pub current_ratio: f64,
    /// Quick ratio benchmark
    pub quick_ratio: f64,
    /// Current asset turnover benchmark
    pub current_asset_turnover: f64,
    /// Total asset turnover benchmark
    pub total_asset_turnover: f64,
    /// Days sales outstanding benchmark
    pub days_sales_outstanding: f64,
    /// Profit margin benchmark
    pub profit_margin: f64,
    /// Debt ratio benchmark
    pub debt_ratio: f64,
    /// Return on equity benchmark
    pub return_on_equity: f64,
    /// Basic earning power benchmark
    pub basic_earning_power: f64,
}

impl Default for IndustryBaseline {
    fn default() -> Self {
        Self {
            current_ratio: 1.5,
            quick_ratio: 1.0,
            current_asset_turnover: 2.0,
            total_asset_turnover: 0.8,
            days_sales_outstanding: 45.0,
            profit_margin: 0.10,
            debt_ratio: 0.5,
            return_on_equity: 0.15,
            basic_earning_power: 0.10,
        }
    }
}

impl IndustryBaseline {
    /// Benchmark value for `metric`.
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CurrentRatio => self.current_ratio,
            Metric::QuickRatio => self.quick_ratio,
            Metric::CurrentAssetTurnover => self.current_asset_turnover,
            Metric::TotalAssetTurnover => self.total_asset_turnover,
            Metric::DaysSalesOutstanding => self.days_sales_outstanding,
            Metric::ProfitMargin => self.profit_margin,
            Metric::DebtRatio => self.debt_ratio,
            Metric::ReturnOnEquity => self.return_on_equity,
            Metric::BasicEarningPower => self.basic_earning_power,
        }
    }

    /// Use a company's own ratios as the benchmark.
    ///
    /// Undefined metrics become NaN.
    pub fn from_snapshot(snapshot: &RatioSnapshot) -> Self {
        let value = |metric| snapshot.get(metric).unwrap_or(f64::NAN);
        Self {
            current_ratio: value(Metric::CurrentRatio),
            quick_ratio: value(Metric::QuickRatio),
            current_asset_turnover: value(Metric::CurrentAssetTurnover),
            total_asset_turnover: value(Metric::TotalAssetTurnover),
            days_sales_outstanding: value(Metric::DaysSalesOutstanding),
            profit_margin: value(Metric::ProfitMargin),
            debt_ratio: value(Metric::DebtRatio),
            return_on_equity: value(Metric::ReturnOnEquity),
            basic_earning_power: value(Metric::BasicEarningPower),
        }
    }
}
