//! Error types for ratio computations.

use crate::{rows::CanonicalRow, statement::StatementKind};
use thiserror::Error;

/// Result type for ratio operations.
pub type Result<T> = std::result::Result<T, RatioError>;

/// Errors that can occur while deriving ratios from financial statements.
#[derive(Debug, Error)]
pub enum RatioError {
    /// Balance sheet and income statement share no reporting period
    #[error(
        "No common reporting periods between balance sheet ({balance_sheet} periods) and income statement ({income_statement} periods)"
    )]
    Alignment {
        /// Number of periods in the balance sheet
        balance_sheet: usize,
        /// Number of periods in the income statement
        income_statement: usize,
    },

    /// A mandatory canonical row has no matching label in its statement
    #[error(
        "Could not find {row} in {statement}. Tried: {}. Available rows: {}",
        .candidates.join(", "),
        .available.join(", ")
    )]
    RequiredRowNotFound {
        /// The canonical row that could not be resolved
        row: CanonicalRow,
        /// Statement that was searched
        statement: StatementKind,
        /// Candidate labels that were tried, in priority order
        candidates: Vec<String>,
        /// Every row label present in the statement
        available: Vec<String>,
    },

    /// A period column name could not be parsed as a date
    #[error("Invalid reporting period: {0}")]
    InvalidPeriod(String),

    /// Missing required column in input data
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Row values do not line up with the statement's periods
    #[error("Row '{label}' has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Offending row label
        label: String,
        /// Number of periods in the statement
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Not enough periods to perform the operation
    #[error("Insufficient data: need {required} periods, got {available}")]
    InsufficientData {
        /// Required number of periods
        required: usize,
        /// Available number of periods
        available: usize,
    },

    /// Ratio not found in registry
    #[error("Ratio not found: {0}")]
    NotFound(String),

    /// The statement provider failed
    #[error("Failed to retrieve statements for {ticker}: {message}")]
    Source {
        /// Ticker that was requested
        ticker: String,
        /// Provider diagnostic
        message: String,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O failure while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars DataFrame error
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
