//! Metric engine.
//!
//! Resolves canonical rows from aligned statements into a working frame (one
//! column per row, one row per period), fills in derivable rows, and evaluates
//! every registered [`Ratio`](crate::Ratio) expression over it.

use crate::{
    AlignedStatements, MetricsTable, RatioError, RatioRegistry, Result,
    metrics::PERIOD_COLUMN,
    rows::{CanonicalRow, ResolvedRow},
    traits::RowInputs,
};
use polars::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Working-frame column holding the trailing average of current assets.
pub const AVERAGE_CURRENT_ASSETS: &str = "average_current_assets";

/// Working-frame column holding the trailing average of total assets.
pub const AVERAGE_TOTAL_ASSETS: &str = "average_total_assets";

/// Two-point trailing average over a most-recent-first series.
///
/// Every period except the oldest is averaged with the next-older period; the
/// oldest keeps its own value since there is nothing older to pair it with.
///
/// ```text
/// [300, 200, 100] -> [250, 150, 100]
/// ```
pub fn trailing_average(values: &[Option<f64>]) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match values.get(index + 1) {
            Some(older) => value.zip(*older).map(|(v, o)| (v + o) / 2.0),
            None => *value,
        })
        .collect()
}

/// Computes the metrics table from aligned statements.
#[derive(Debug, Clone)]
pub struct MetricEngine {
    registry: RatioRegistry,
}

impl Default for MetricEngine {
    fn default() -> Self {
        Self::new(RatioRegistry::with_defaults())
    }
}

impl MetricEngine {
    /// Create an engine computing the ratios in `registry`.
    pub const fn new(registry: RatioRegistry) -> Self {
        Self { registry }
    }

    /// The ratios this engine computes.
    pub const fn registry(&self) -> &RatioRegistry {
        &self.registry
    }

    /// Resolve every canonical row that the statements provide.
    ///
    /// # Errors
    ///
    /// [`RatioError::RequiredRowNotFound`] for the first mandatory row with no
    /// matching label.
    pub fn resolve_rows<'a>(
        &self,
        aligned: &'a AlignedStatements,
    ) -> Result<BTreeMap<CanonicalRow, ResolvedRow<'a>>> {
        let mut resolved = BTreeMap::new();

        for row in CanonicalRow::REQUIRED {
            let found = row.resolve(aligned).ok_or_else(|| required_row_missing(row, aligned))?;
            debug!(row = %row, label = found.label, "resolved required row");
            resolved.insert(row, found);
        }

        for row in CanonicalRow::OPTIONAL {
            match row.resolve(aligned) {
                Some(found) => {
                    debug!(row = %row, label = found.label, "resolved optional row");
                    resolved.insert(row, found);
                }
                None => debug!(row = %row, "optional row not found"),
            }
        }

        Ok(resolved)
    }

    /// Build the working frame the ratio expressions are evaluated against.
    ///
    /// Columns: the period, every resolved canonical row, derived total
    /// liabilities and EBIT when not reported, and the two trailing averages.
    pub fn working_frame(&self, aligned: &AlignedStatements) -> Result<(DataFrame, RowInputs)> {
        let resolved = self.resolve_rows(aligned)?;

        let periods: Vec<String> = aligned.periods().iter().map(ToString::to_string).collect();
        let mut columns = vec![Column::new(PERIOD_COLUMN.into(), periods)];
        let mut inputs = RowInputs::new();

        for (row, found) in &resolved {
            inputs.insert(*row, found.label);
            columns.push(Column::new(row.column_name().into(), found.values.to_vec()));
        }

        // required rows are present once resolve_rows succeeded
        let current_assets = resolved[&CanonicalRow::CurrentAssets].values;
        let total_assets = resolved[&CanonicalRow::TotalAssets].values;
        columns.push(Column::new(
            AVERAGE_CURRENT_ASSETS.into(),
            trailing_average(current_assets),
        ));
        columns.push(Column::new(
            AVERAGE_TOTAL_ASSETS.into(),
            trailing_average(total_assets),
        ));

        let frame = DataFrame::new(columns)?;
        let derived = derived_rows(&inputs);
        let frame = if derived.is_empty() {
            frame
        } else {
            frame.lazy().with_columns(derived).collect()?
        };

        Ok((frame, inputs))
    }

    /// Compute every registered ratio for every aligned period.
    pub fn compute(&self, aligned: &AlignedStatements) -> Result<MetricsTable> {
        let (frame, inputs) = self.working_frame(aligned)?;

        let mut exprs = vec![col(PERIOD_COLUMN)];
        exprs.extend(
            self.registry
                .iter()
                .map(|ratio| ratio.expr(&inputs).alias(ratio.metric().label())),
        );

        let result = frame.lazy().select(exprs).collect()?;
        let table = MetricsTable::from_frame(
            aligned.periods().to_vec(),
            &result,
            self.registry.iter().map(|ratio| ratio.metric()),
        )?;

        debug!(periods = table.len(), "computed metrics table");
        Ok(table)
    }
}

/// Expressions for canonical rows the statements did not report directly.
fn derived_rows(inputs: &RowInputs) -> Vec<Expr> {
    let mut derived = Vec::new();

    if !inputs.contains(CanonicalRow::TotalLiabilities) {
        debug!("deriving total liabilities from total assets and equity");
        derived.push(
            (CanonicalRow::TotalAssets.expr() - CanonicalRow::ShareholderEquity.expr())
                .alias(CanonicalRow::TotalLiabilities.column_name()),
        );
    }

    if !inputs.contains(CanonicalRow::Ebit) {
        debug!("deriving EBIT from net income, interest and taxes");
        let mut ebit = CanonicalRow::NetIncome.expr();
        for addend in [CanonicalRow::InterestExpense, CanonicalRow::IncomeTax] {
            if inputs.contains(addend) {
                ebit = ebit + addend.expr();
            }
        }
        derived.push(ebit.alias(CanonicalRow::Ebit.column_name()));
    }

    derived
}

fn required_row_missing(row: CanonicalRow, aligned: &AlignedStatements) -> RatioError {
    let statement = aligned.get(row.source());
    RatioError::RequiredRowNotFound {
        row,
        statement: row.source(),
        candidates: row.candidates().iter().map(ToString::to_string).collect(),
        available: statement.labels().to_vec(),
    }
}
