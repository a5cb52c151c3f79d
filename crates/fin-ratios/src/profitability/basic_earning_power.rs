//! Basic Earning Power.
//!
//! Basic Earning Power measures the raw earning ability of a company's assets
//! before the effects of taxes and financial leverage.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Basic Earning Power.
///
/// ```text
/// BEP = EBIT / Total Assets
/// ```
///
/// The engine always provides an EBIT column: the reported line when present,
/// otherwise net income plus whichever of interest expense and income tax
/// were reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEarningPower;

impl Ratio for BasicEarningPower {
    fn metric(&self) -> Metric {
        Metric::BasicEarningPower
    }

    fn description(&self) -> &str {
        "Basic Earning Power - EBIT divided by total assets"
    }

    fn formula(&self) -> &str {
        "EBIT / Total Assets"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::Ebit, CanonicalRow::TotalAssets]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::Ebit.expr() / CanonicalRow::TotalAssets.expr()
    }
}
