//! The nine derived ratios.

use crate::{RatioError, registry::RatioCategory};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identity of a derived ratio.
///
/// Declaration order is display order: liquidity, efficiency, profitability,
/// solvency.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Current assets over current liabilities
    #[display("Current Ratio")]
    CurrentRatio,
    /// Current assets net of inventory over current liabilities
    #[display("Quick Ratio")]
    QuickRatio,
    /// Revenue over average current assets
    #[display("Current Asset Turnover")]
    CurrentAssetTurnover,
    /// Revenue over average total assets
    #[display("Total Asset Turnover")]
    TotalAssetTurnover,
    /// Receivables expressed in days of revenue
    #[display("Days Sales Outstanding")]
    DaysSalesOutstanding,
    /// Net income over revenue
    #[display("Profit Margin")]
    ProfitMargin,
    /// Total liabilities over total assets
    #[display("Debt Ratio")]
    DebtRatio,
    /// Net income over shareholder equity
    #[display("Return on Equity")]
    ReturnOnEquity,
    /// EBIT over total assets
    #[display("Basic Earning Power")]
    BasicEarningPower,
}

impl Metric {
    /// Every metric in display order.
    pub const ALL: [Self; 9] = [
        Self::CurrentRatio,
        Self::QuickRatio,
        Self::CurrentAssetTurnover,
        Self::TotalAssetTurnover,
        Self::DaysSalesOutstanding,
        Self::ProfitMargin,
        Self::DebtRatio,
        Self::ReturnOnEquity,
        Self::BasicEarningPower,
    ];

    /// Stable snake_case identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "current_ratio",
            Self::QuickRatio => "quick_ratio",
            Self::CurrentAssetTurnover => "current_asset_turnover",
            Self::TotalAssetTurnover => "total_asset_turnover",
            Self::DaysSalesOutstanding => "days_sales_outstanding",
            Self::ProfitMargin => "profit_margin",
            Self::DebtRatio => "debt_ratio",
            Self::ReturnOnEquity => "return_on_equity",
            Self::BasicEarningPower => "basic_earning_power",
        }
    }

    /// Human-readable label, also the metrics table column name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "Current Ratio",
            Self::QuickRatio => "Quick Ratio",
            Self::CurrentAssetTurnover => "Current Asset Turnover",
            Self::TotalAssetTurnover => "Total Asset Turnover",
            Self::DaysSalesOutstanding => "Days Sales Outstanding",
            Self::ProfitMargin => "Profit Margin",
            Self::DebtRatio => "Debt Ratio",
            Self::ReturnOnEquity => "Return on Equity",
            Self::BasicEarningPower => "Basic Earning Power",
        }
    }

    /// Composite axis this metric contributes to.
    pub const fn category(&self) -> RatioCategory {
        match self {
            Self::CurrentRatio | Self::QuickRatio => RatioCategory::Liquidity,
            Self::CurrentAssetTurnover | Self::TotalAssetTurnover | Self::DaysSalesOutstanding => {
                RatioCategory::Efficiency
            }
            Self::ProfitMargin | Self::ReturnOnEquity | Self::BasicEarningPower => {
                RatioCategory::Profitability
            }
            Self::DebtRatio => RatioCategory::Solvency,
        }
    }

    /// Whether the metric exists only when its optional input rows are
    /// reported. Such a metric is left out of charts and reports when it is
    /// undefined for every period.
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::DaysSalesOutstanding)
    }

    /// Whether a larger value is the favourable direction.
    pub const fn higher_is_better(&self) -> bool {
        !matches!(self, Self::DaysSalesOutstanding | Self::DebtRatio)
    }
}

impl FromStr for Metric {
    type Err = RatioError;

    /// Accepts either the snake_case name or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(needle) || m.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RatioError::NotFound(s.to_string()))
    }
}
