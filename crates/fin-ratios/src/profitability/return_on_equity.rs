//! Return on Equity.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Return on Equity.
///
/// ```text
/// ROE = Net Income / Shareholders' Equity
/// ```
///
/// Negative equity flips the sign; no adjustment is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnOnEquity;

impl Ratio for ReturnOnEquity {
    fn metric(&self) -> Metric {
        Metric::ReturnOnEquity
    }

    fn description(&self) -> &str {
        "Return on Equity - net income divided by shareholders' equity"
    }

    fn formula(&self) -> &str {
        "Net Income / Shareholders' Equity"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::NetIncome, CanonicalRow::ShareholderEquity]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::NetIncome.expr() / CanonicalRow::ShareholderEquity.expr()
    }
}
