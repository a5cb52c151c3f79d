//! The metrics table.
//!
//! One row per aligned period (most recent first), one column per metric. A
//! cell is `None` when the metric is undefined for that period: a missing
//! optional input, an absent statement value, or a `0 / 0` division. Infinite
//! values from zero denominators are kept as-is.

use crate::{IndustryBaseline, Metric, Period, RatioError, Result};
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Period column name in [`MetricsTable::to_frame`].
pub const PERIOD_COLUMN: &str = "period";

/// Label column name in [`MetricsTable::to_display_frame`].
pub const METRIC_COLUMN: &str = "Metric";

/// Reference column appended to display tables.
pub const INDUSTRY_AVERAGE: &str = "Industry Average";

/// Period-indexed table of derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsTable {
    periods: Vec<Period>,
    columns: BTreeMap<Metric, Vec<Option<f64>>>,
}

impl MetricsTable {
    /// Build a table from per-metric series aligned with `periods`.
    pub fn new(periods: Vec<Period>, columns: BTreeMap<Metric, Vec<Option<f64>>>) -> Result<Self> {
        if let Some((metric, series)) = columns.iter().find(|(_, s)| s.len() != periods.len()) {
            return Err(RatioError::ShapeMismatch {
                label: metric.label().to_string(),
                expected: periods.len(),
                actual: series.len(),
            });
        }

        let columns = columns
            .into_iter()
            .map(|(metric, series)| (metric, series.into_iter().map(defined).collect()))
            .collect();

        Ok(Self { periods, columns })
    }

    /// Read `metrics` from a computed frame whose columns carry metric labels.
    pub fn from_frame(
        periods: Vec<Period>,
        frame: &DataFrame,
        metrics: impl IntoIterator<Item = Metric>,
    ) -> Result<Self> {
        let mut columns = BTreeMap::new();
        for metric in metrics {
            let column = frame
                .column(metric.label())
                .map_err(|_| RatioError::MissingColumn(metric.label().to_string()))?
                .cast(&DataType::Float64)?;
            columns.insert(metric, column.f64()?.into_iter().collect());
        }
        Self::new(periods, columns)
    }

    /// Periods, most recent first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of periods.
    pub const fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the table has no periods.
    pub const fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Metrics present in the table, in display order.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.columns.keys().copied()
    }

    /// All values of `metric`, most recent first.
    pub fn series(&self, metric: Metric) -> Option<&[Option<f64>]> {
        self.columns.get(&metric).map(Vec::as_slice)
    }

    /// Value of `metric` at period `index`.
    pub fn value(&self, index: usize, metric: Metric) -> Option<f64> {
        self.series(metric)?.get(index).copied().flatten()
    }

    /// Whether `metric` has no value in any period.
    pub fn is_undefined(&self, metric: Metric) -> bool {
        self.series(metric)
            .is_none_or(|series| series.iter().all(Option::is_none))
    }

    /// Whether charts and reports should show `metric`.
    ///
    /// Optional metrics (DSO) are hidden when wholly undefined; every other
    /// metric in the table is always shown.
    pub fn is_reported(&self, metric: Metric) -> bool {
        self.columns.contains_key(&metric) && !(metric.is_optional() && self.is_undefined(metric))
    }

    /// The most recent period's values.
    pub fn latest(&self) -> Option<RatioSnapshot> {
        let period = *self.periods.first()?;
        let values = self
            .columns
            .iter()
            .map(|(metric, series)| (*metric, series[0]))
            .collect();
        Some(RatioSnapshot { period, values })
    }

    /// Export with one row per period: a [`PERIOD_COLUMN`] followed by one
    /// column per metric label.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let periods: Vec<String> = self.periods.iter().map(ToString::to_string).collect();
        let mut columns = vec![Column::new(PERIOD_COLUMN.into(), periods)];
        for (metric, series) in &self.columns {
            columns.push(Column::new(metric.label().into(), series.clone()));
        }
        Ok(DataFrame::new(columns)?)
    }

    /// Export transposed for display: one row per reported metric (see
    /// [`Self::is_reported`]), one column per period, and an
    /// [`INDUSTRY_AVERAGE`] column when a baseline is given.
    pub fn to_display_frame(&self, baseline: Option<&IndustryBaseline>) -> Result<DataFrame> {
        let rows: Vec<(Metric, &Vec<Option<f64>>)> = self
            .columns
            .iter()
            .filter(|(metric, _)| self.is_reported(**metric))
            .map(|(metric, series)| (*metric, series))
            .collect();

        let labels: Vec<&str> = rows.iter().map(|(metric, _)| metric.label()).collect();
        let mut columns = vec![Column::new(METRIC_COLUMN.into(), labels)];

        for (index, period) in self.periods.iter().enumerate() {
            let values: Vec<Option<f64>> = rows.iter().map(|(_, series)| series[index]).collect();
            columns.push(Column::new(period.to_string().into(), values));
        }

        if let Some(baseline) = baseline {
            let averages: Vec<f64> = rows.iter().map(|(metric, _)| baseline.get(*metric)).collect();
            columns.push(Column::new(INDUSTRY_AVERAGE.into(), averages));
        }

        Ok(DataFrame::new(columns)?)
    }
}

/// One period's metric values, the input to scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioSnapshot {
    /// Period the values belong to
    pub period: Period,
    /// Value per metric; `None` when undefined
    pub values: BTreeMap<Metric, Option<f64>>,
}

impl RatioSnapshot {
    /// Value of `metric`, if defined.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied().flatten()
    }
}

fn defined(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}
