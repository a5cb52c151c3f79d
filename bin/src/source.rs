//! Statements read from CSV exports on disk.

use anyhow::{Context, anyhow};
use fin_ratios::{FinancialStatement, StatementKind, StatementSet, StatementSource};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads `<root>/<TICKER>/{balance_sheet,income_statement,cash_flow}.csv`.
///
/// The first CSV column holds line-item labels and every other column is a
/// fiscal period. A missing cash flow file yields an empty statement.
#[derive(Debug, Clone)]
pub(crate) struct CsvDirectorySource {
    root: PathBuf,
}

impl CsvDirectorySource {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, ticker: &str, kind: StatementKind) -> PathBuf {
        let file = match kind {
            StatementKind::BalanceSheet => "balance_sheet.csv",
            StatementKind::IncomeStatement => "income_statement.csv",
            StatementKind::CashFlow => "cash_flow.csv",
        };
        self.root.join(ticker.to_uppercase()).join(file)
    }

    fn load(&self, ticker: &str, kind: StatementKind) -> anyhow::Result<FinancialStatement> {
        let path = self.path(ticker, kind);
        if kind == StatementKind::CashFlow && !path.exists() {
            debug!(path = %path.display(), "no cash flow statement, using an empty one");
            return Ok(FinancialStatement::new(Vec::new(), Vec::new())?);
        }
        read_statement(&path).map_err(|e| anyhow!("{}: {e:#}", path.display()))
    }
}

impl StatementSource for CsvDirectorySource {
    type Error = anyhow::Error;

    fn fetch(&self, ticker: &str) -> anyhow::Result<StatementSet> {
        Ok(StatementSet::new(
            self.load(ticker, StatementKind::BalanceSheet)?,
            self.load(ticker, StatementKind::IncomeStatement)?,
            self.load(ticker, StatementKind::CashFlow)?,
        ))
    }
}

fn read_statement(path: &Path) -> anyhow::Result<FinancialStatement> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let label_column = frame
        .get_column_names()
        .first()
        .map(|name| name.to_string())
        .context("empty statement file")?;

    debug!(path = %path.display(), rows = frame.height(), "read statement");
    Ok(FinancialStatement::from_frame(&frame, &label_column)?)
}

/// Write `frame` as CSV to `path`.
pub(crate) fn write_csv(path: &Path, frame: &mut DataFrame) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).include_header(true).finish(frame)?;
    Ok(())
}
