//! Debt Ratio.
//!
//! Debt Ratio measures the share of assets financed by liabilities. Lower
//! values indicate a more conservative capital structure.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Debt Ratio.
///
/// ```text
/// Debt Ratio = Total Liabilities / Total Assets
/// ```
///
/// When total liabilities are not reported the engine derives them as total
/// assets minus shareholders' equity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebtRatio;

impl Ratio for DebtRatio {
    fn metric(&self) -> Metric {
        Metric::DebtRatio
    }

    fn description(&self) -> &str {
        "Debt Ratio - total liabilities divided by total assets"
    }

    fn formula(&self) -> &str {
        "Total Liabilities / Total Assets"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::TotalLiabilities, CanonicalRow::TotalAssets]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::TotalLiabilities.expr() / CanonicalRow::TotalAssets.expr()
    }
}
