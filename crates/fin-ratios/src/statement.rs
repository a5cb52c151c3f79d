//! Financial statement tables.
//!
//! A [`FinancialStatement`] is a label-indexed, period-keyed table: each row is a
//! line item as the vendor spelled it, each column a fiscal period end. Frames
//! coming from a data provider are imported once through
//! [`FinancialStatement::from_frame`] and are immutable afterwards.

use crate::{Period, RatioError, Result};
use derive_more::Display;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Name of the label column in frames produced by [`FinancialStatement::to_frame`].
pub const LINE_ITEM: &str = "line_item";

/// The three statements a company reports.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Point-in-time assets, liabilities and equity
    #[display("balance sheet")]
    BalanceSheet,
    /// Revenue and expenses over the period
    #[display("income statement")]
    IncomeStatement,
    /// Operating, investing and financing cash flows
    #[display("cash flow statement")]
    CashFlow,
}

impl StatementKind {
    /// Title used for report sheets.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet",
            Self::IncomeStatement => "Income Statement",
            Self::CashFlow => "Cash Flow",
        }
    }
}

/// A statement table with rows keyed by line-item label and columns by period.
///
/// Labels are not guaranteed unique across vendors; lookups return the first
/// occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialStatement {
    labels: Vec<String>,
    periods: Vec<Period>,
    // row-major: values[row][period]
    values: Vec<Vec<Option<f64>>>,
}

impl FinancialStatement {
    /// Build a statement from periods and labelled rows.
    ///
    /// Every row must carry exactly one value per period.
    pub fn new(periods: Vec<Period>, rows: Vec<(String, Vec<Option<f64>>)>) -> Result<Self> {
        let mut labels = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());

        for (label, row) in rows {
            if row.len() != periods.len() {
                return Err(RatioError::ShapeMismatch {
                    label,
                    expected: periods.len(),
                    actual: row.len(),
                });
            }
            labels.push(label);
            values.push(row);
        }

        Ok(Self {
            labels,
            periods,
            values,
        })
    }

    /// Import a statement from a DataFrame.
    ///
    /// `label_column` holds the line-item names; every other column is a period
    /// whose name is normalized through [`Period::parse`]. Values of any numeric
    /// dtype are cast to `f64`; cells that cannot be cast become absent. Columns
    /// whose name is not a date (e.g. `TTM`) or normalizes to an already-seen
    /// period are skipped.
    ///
    /// # Errors
    ///
    /// [`RatioError::InvalidPeriod`] when there are period columns but none of
    /// their names parse.
    pub fn from_frame(frame: &DataFrame, label_column: &str) -> Result<Self> {
        let labels = frame
            .column(label_column)
            .map_err(|_| RatioError::MissingColumn(label_column.to_string()))?
            .cast(&DataType::String)?;
        let labels: Vec<String> = labels
            .str()?
            .into_iter()
            .map(|label| label.unwrap_or_default().to_string())
            .collect();

        let mut periods = Vec::new();
        let mut columns: Vec<Vec<Option<f64>>> = Vec::new();
        let mut unparsed: Option<String> = None;

        for name in frame.get_column_names() {
            if name.as_str() == label_column {
                continue;
            }
            let period = match Period::parse(name.as_str()) {
                Ok(period) => period,
                Err(_) => {
                    warn!(column = %name, "skipping column that is not a reporting period");
                    unparsed.get_or_insert_with(|| name.to_string());
                    continue;
                }
            };
            if periods.contains(&period) {
                warn!(column = %name, %period, "skipping duplicate period column");
                continue;
            }
            let values = frame.column(name.as_str())?.cast(&DataType::Float64)?;
            columns.push(values.f64()?.into_iter().collect());
            periods.push(period);
        }

        if let Some(column) = unparsed.filter(|_| periods.is_empty()) {
            return Err(RatioError::InvalidPeriod(column));
        }

        let values = (0..labels.len())
            .map(|row| columns.iter().map(|column| column[row]).collect())
            .collect();

        Ok(Self {
            labels,
            periods,
            values,
        })
    }

    /// Export the statement as a DataFrame with a [`LINE_ITEM`] column followed
    /// by one `f64` column per period.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.periods.len() + 1);
        columns.push(Column::new(LINE_ITEM.into(), self.labels.clone()));

        for (index, period) in self.periods.iter().enumerate() {
            let values: Vec<Option<f64>> = self.values.iter().map(|row| row[index]).collect();
            columns.push(Column::new(period.to_string().into(), values));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Row labels in statement order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Period columns in statement order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of rows.
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the statement has no rows.
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether a row with this exact label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Values of the first row carrying `label`, one per period.
    pub fn row(&self, label: &str) -> Option<&[Option<f64>]> {
        self.position(label).map(|index| self.values[index].as_slice())
    }

    /// Project the statement onto `periods`, in that order.
    ///
    /// Periods the statement does not report become absent values.
    pub fn restrict(&self, periods: &[Period]) -> Self {
        let indices: Vec<Option<usize>> = periods
            .iter()
            .map(|period| self.periods.iter().position(|p| p == period))
            .collect();

        let values = self
            .values
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|index| index.and_then(|i| row[i]))
                    .collect()
            })
            .collect();

        Self {
            labels: self.labels.clone(),
            periods: periods.to_vec(),
            values,
        }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// The raw statement triple for one company, as delivered by a data provider.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementSet {
    /// Balance sheet
    pub balance_sheet: FinancialStatement,
    /// Income statement
    pub income_statement: FinancialStatement,
    /// Cash flow statement
    pub cash_flow: FinancialStatement,
}

impl StatementSet {
    /// Bundle three statements.
    pub const fn new(
        balance_sheet: FinancialStatement,
        income_statement: FinancialStatement,
        cash_flow: FinancialStatement,
    ) -> Self {
        Self {
            balance_sheet,
            income_statement,
            cash_flow,
        }
    }

    /// Align the statements on their common periods.
    ///
    /// See [`crate::align`].
    pub fn align(&self, lookback_years: usize) -> Result<crate::AlignedStatements> {
        crate::align(
            &self.balance_sheet,
            &self.income_statement,
            &self.cash_flow,
            lookback_years,
        )
    }

    /// The statement of the given kind.
    pub const fn get(&self, kind: StatementKind) -> &FinancialStatement {
        match kind {
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::IncomeStatement => &self.income_statement,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }
}
