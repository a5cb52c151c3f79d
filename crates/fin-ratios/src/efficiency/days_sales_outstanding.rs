//! Days Sales Outstanding.
//!
//! DSO expresses outstanding receivables as a number of days of revenue. Lower
//! values mean the company collects faster.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{ConfigurableRatio, Ratio, RowInputs},
};
use polars::prelude::*;

/// Configuration for Days Sales Outstanding.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct DaysSalesOutstandingConfig {
    /// Day count used to turn annual revenue into daily revenue (default: 365)
    pub days_per_year: f64,
}

impl Default for DaysSalesOutstandingConfig {
    fn default() -> Self {
        Self {
            days_per_year: 365.0,
        }
    }
}

/// Days Sales Outstanding.
///
/// ```text
/// DSO = Accounts Receivable / (Revenue / 365)
/// ```
///
/// Without an accounts receivable line the metric is undefined (null) for
/// every period.
#[derive(Debug, Clone, Default)]
pub struct DaysSalesOutstanding {
    config: DaysSalesOutstandingConfig,
}

impl Ratio for DaysSalesOutstanding {
    fn metric(&self) -> Metric {
        Metric::DaysSalesOutstanding
    }

    fn description(&self) -> &str {
        "Days Sales Outstanding - accounts receivable measured in days of revenue"
    }

    fn formula(&self) -> &str {
        "(Accounts Receivable / Revenue) * 365"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::AccountsReceivable, CanonicalRow::Revenue]
    }

    fn expr(&self, inputs: &RowInputs) -> Expr {
        if inputs.contains(CanonicalRow::AccountsReceivable) {
            CanonicalRow::AccountsReceivable.expr()
                / (CanonicalRow::Revenue.expr() / lit(self.config.days_per_year))
        } else {
            lit(NULL).cast(DataType::Float64)
        }
    }
}

impl ConfigurableRatio for DaysSalesOutstanding {
    type Config = DaysSalesOutstandingConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
