//! Quick Ratio.
//!
//! Quick Ratio measures a company's ability to pay short-term obligations with
//! its most liquid assets. Also known as the Acid-Test Ratio.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Quick Ratio.
///
/// ```text
/// Quick Ratio = (Current Assets - Inventory) / Current Liabilities
/// ```
///
/// When the balance sheet carries no inventory line the ratio falls back to the
/// current ratio, computed by the identical expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickRatio;

impl Ratio for QuickRatio {
    fn metric(&self) -> Metric {
        Metric::QuickRatio
    }

    fn description(&self) -> &str {
        "Quick Ratio - (current assets minus inventory) divided by current liabilities"
    }

    fn formula(&self) -> &str {
        "(Current Assets - Inventory) / Current Liabilities"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[
            CanonicalRow::CurrentAssets,
            CanonicalRow::Inventory,
            CanonicalRow::CurrentLiabilities,
        ]
    }

    fn expr(&self, inputs: &RowInputs) -> Expr {
        if inputs.contains(CanonicalRow::Inventory) {
            (CanonicalRow::CurrentAssets.expr() - CanonicalRow::Inventory.expr())
                / CanonicalRow::CurrentLiabilities.expr()
        } else {
            CanonicalRow::CurrentAssets.expr() / CanonicalRow::CurrentLiabilities.expr()
        }
    }
}
