//! Total Asset Turnover.
//!
//! Total Asset Turnover measures how efficiently a company uses its asset base
//! to generate revenue.

use crate::{
    Metric,
    engine::AVERAGE_TOTAL_ASSETS,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Total Asset Turnover.
///
/// ```text
/// Total Asset Turnover = Revenue / Average Total Assets
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalAssetTurnover;

impl Ratio for TotalAssetTurnover {
    fn metric(&self) -> Metric {
        Metric::TotalAssetTurnover
    }

    fn description(&self) -> &str {
        "Total Asset Turnover - revenue divided by average total assets"
    }

    fn formula(&self) -> &str {
        "Revenue / Average Total Assets"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::Revenue, CanonicalRow::TotalAssets]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::Revenue.expr() / col(AVERAGE_TOTAL_ASSETS)
    }
}
