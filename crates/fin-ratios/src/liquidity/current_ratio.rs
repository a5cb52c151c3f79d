//! Current Ratio.
//!
//! Current Ratio measures a company's ability to pay short-term obligations.
//! Higher ratios indicate better liquidity.

use crate::{
    Metric,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Current Ratio.
///
/// ```text
/// Current Ratio = Current Assets / Current Liabilities
/// ```
///
/// A ratio above 1.0 indicates the company can cover its short-term liabilities
/// with short-term assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentRatio;

impl Ratio for CurrentRatio {
    fn metric(&self) -> Metric {
        Metric::CurrentRatio
    }

    fn description(&self) -> &str {
        "Current Ratio - current assets divided by current liabilities"
    }

    fn formula(&self) -> &str {
        "Current Assets / Current Liabilities"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::CurrentAssets, CanonicalRow::CurrentLiabilities]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::CurrentAssets.expr() / CanonicalRow::CurrentLiabilities.expr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RatioCategory;

    #[test]
    fn test_current_ratio_metadata() {
        let ratio = CurrentRatio;
        assert_eq!(ratio.name(), "current_ratio");
        assert_eq!(ratio.category(), RatioCategory::Liquidity);
    }

    #[test]
    fn test_current_ratio_computation() {
        let df = df![
            "current_assets" => [150000.0, 120000.0, 180000.0],
            "current_liabilities" => [100000.0, 80000.0, 150000.0]
        ]
        .unwrap();

        let result = df
            .lazy()
            .select([CurrentRatio.expr(&RowInputs::new()).alias("current_ratio")])
            .collect()
            .unwrap();

        let values = result.column("current_ratio").unwrap().f64().unwrap();
        assert!((values.get(0).unwrap() - 1.5).abs() < 1e-6);
        assert!((values.get(1).unwrap() - 1.5).abs() < 1e-6);
        assert!((values.get(2).unwrap() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_current_ratio_zero_liabilities_is_infinite() {
        let df = df![
            "current_assets" => [100.0],
            "current_liabilities" => [0.0]
        ]
        .unwrap();

        let result = df
            .lazy()
            .select([CurrentRatio.expr(&RowInputs::new()).alias("current_ratio")])
            .collect()
            .unwrap();

        let values = result.column("current_ratio").unwrap().f64().unwrap();
        assert!(values.get(0).unwrap().is_infinite());
    }
}
