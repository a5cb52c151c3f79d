//! Profit Margin.
//!
//! Profit margin measures the share of revenue that becomes net income.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Profit Margin.
///
/// ```text
/// Profit Margin = Net Income / Revenue
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitMargin;

impl Ratio for ProfitMargin {
    fn metric(&self) -> Metric {
        Metric::ProfitMargin
    }

    fn description(&self) -> &str {
        "Profit Margin - net income divided by revenue"
    }

    fn formula(&self) -> &str {
        "Net Income / Revenue"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::NetIncome, CanonicalRow::Revenue]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::NetIncome.expr() / CanonicalRow::Revenue.expr()
    }
}
