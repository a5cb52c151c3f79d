//! Composite scoring against industry baselines.
//!
//! Each axis averages its ratios after dividing by the baseline, so a company
//! exactly at the benchmark scores 1.0 everywhere. Ratios where lower is better
//! (DSO, debt ratio) are inverted.

use crate::{IndustryBaseline, Metric, RatioCategory, metrics::RatioSnapshot};
use serde::{Deserialize, Serialize};

/// Upper bound on a single normalized liquidity ratio.
pub const LIQUIDITY_CAP: f64 = 2.0;

/// Floor applied to profitability baselines before dividing.
pub const PROFITABILITY_FLOOR: f64 = 0.01;

/// Four-axis summary of the most recent period relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Normalized current and quick ratios
    pub liquidity: f64,
    /// Normalized turnover ratios and inverted DSO
    pub efficiency: f64,
    /// Normalized margin, ROE and basic earning power
    pub profitability: f64,
    /// Inverted debt ratio; not capped, may leave the `[0, 2]` display range
    pub solvency: f64,
}

impl CompositeScore {
    /// Axis labels in radar order.
    pub const LABELS: [&'static str; 4] = ["Liquidity", "Efficiency", "Profitability", "Solvency"];

    /// The baseline itself: parity on every axis.
    pub const fn baseline() -> Self {
        Self {
            liquidity: 1.0,
            efficiency: 1.0,
            profitability: 1.0,
            solvency: 1.0,
        }
    }

    /// Axis values in radar order.
    pub const fn to_values(&self) -> [f64; 4] {
        [self.liquidity, self.efficiency, self.profitability, self.solvency]
    }

    /// Value of one axis.
    pub const fn axis(&self, category: RatioCategory) -> f64 {
        match category {
            RatioCategory::Liquidity => self.liquidity,
            RatioCategory::Efficiency => self.efficiency,
            RatioCategory::Profitability => self.profitability,
            RatioCategory::Solvency => self.solvency,
        }
    }
}

/// Score a period's ratios against `baseline`.
///
/// Undefined ratios other than DSO make their axis NaN. An undefined or
/// non-positive DSO scores neutral (1.0) on its component.
pub fn score(snapshot: &RatioSnapshot, baseline: &IndustryBaseline) -> CompositeScore {
    let value = |metric| snapshot.get(metric).unwrap_or(f64::NAN);

    let liquidity = mean(&[
        cap(value(Metric::CurrentRatio) / baseline.current_ratio),
        cap(value(Metric::QuickRatio) / baseline.quick_ratio),
    ]);

    let dso_norm = match snapshot.get(Metric::DaysSalesOutstanding) {
        Some(dso) if dso > 0.0 => baseline.days_sales_outstanding / dso.max(1.0),
        _ => 1.0,
    };
    let efficiency = mean(&[
        value(Metric::CurrentAssetTurnover) / baseline.current_asset_turnover,
        value(Metric::TotalAssetTurnover) / baseline.total_asset_turnover,
        dso_norm,
    ]);

    let profitability = mean(&[
        value(Metric::ProfitMargin) / baseline.profit_margin.max(PROFITABILITY_FLOOR),
        value(Metric::ReturnOnEquity) / baseline.return_on_equity.max(PROFITABILITY_FLOOR),
        value(Metric::BasicEarningPower) / baseline.basic_earning_power.max(PROFITABILITY_FLOOR),
    ]);

    let solvency = 2.0 - value(Metric::DebtRatio) / baseline.debt_ratio;

    CompositeScore {
        liquidity,
        efficiency,
        profitability,
        solvency,
    }
}

// f64::min would turn NaN into the cap
fn cap(value: f64) -> f64 {
    if value > LIQUIDITY_CAP { LIQUIDITY_CAP } else { value }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
