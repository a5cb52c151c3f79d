//! Current Asset Turnover.

use crate::{
    Metric,
    engine::AVERAGE_CURRENT_ASSETS,
    rows::CanonicalRow,
    traits::{Ratio, RowInputs},
};
use polars::prelude::*;

/// Current Asset Turnover.
///
/// ```text
/// Current Asset Turnover = Revenue / Average Current Assets
/// ```
///
/// The average pairs each period with the next-older one; see
/// [`crate::engine::trailing_average`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentAssetTurnover;

impl Ratio for CurrentAssetTurnover {
    fn metric(&self) -> Metric {
        Metric::CurrentAssetTurnover
    }

    fn description(&self) -> &str {
        "Current Asset Turnover - revenue divided by average current assets"
    }

    fn formula(&self) -> &str {
        "Revenue / Average Current Assets"
    }

    fn required_rows(&self) -> &[CanonicalRow] {
        &[CanonicalRow::Revenue, CanonicalRow::CurrentAssets]
    }

    fn expr(&self, _inputs: &RowInputs) -> Expr {
        CanonicalRow::Revenue.expr() / col(AVERAGE_CURRENT_ASSETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_asset_turnover_computation() {
        let df = df![
            "revenue" => [500.0, 300.0],
            "average_current_assets" => [250.0, 100.0]
        ]
        .unwrap();

        let result = df
            .lazy()
            .select([CurrentAssetTurnover.expr(&RowInputs::new()).alias("cat")])
            .collect()
            .unwrap();

        let values = result.column("cat").unwrap().f64().unwrap();
        assert!((values.get(0).unwrap() - 2.0).abs() < 1e-9);
        assert!((values.get(1).unwrap() - 3.0).abs() < 1e-9);
    }
}
