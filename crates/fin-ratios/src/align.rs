//! Period alignment across the three statements.

use crate::{
    Period, RatioError, Result,
    statement::{FinancialStatement, StatementKind},
};
use std::collections::BTreeSet;
use tracing::debug;

/// Statements restricted to a common, descending period axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedStatements {
    balance_sheet: FinancialStatement,
    income_statement: FinancialStatement,
    cash_flow: FinancialStatement,
    periods: Vec<Period>,
}

impl AlignedStatements {
    /// Aligned periods, most recent first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of aligned periods.
    pub const fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether no period survived alignment.
    pub const fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Aligned balance sheet.
    pub const fn balance_sheet(&self) -> &FinancialStatement {
        &self.balance_sheet
    }

    /// Aligned income statement.
    pub const fn income_statement(&self) -> &FinancialStatement {
        &self.income_statement
    }

    /// Aligned cash flow statement.
    pub const fn cash_flow(&self) -> &FinancialStatement {
        &self.cash_flow
    }

    /// The aligned statement of the given kind.
    pub const fn get(&self, kind: StatementKind) -> &FinancialStatement {
        match kind {
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::IncomeStatement => &self.income_statement,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }
}

/// Align three statements on the periods shared by the balance sheet and the
/// income statement.
///
/// The shared periods are sorted most recent first and truncated to
/// `lookback_years` (a lookback of zero is treated as one). The cash flow
/// statement follows the same axis without constraining it; periods it does not
/// report become absent values.
///
/// # Errors
///
/// [`RatioError::Alignment`] when the balance sheet and income statement share
/// no period.
pub fn align(
    balance_sheet: &FinancialStatement,
    income_statement: &FinancialStatement,
    cash_flow: &FinancialStatement,
    lookback_years: usize,
) -> Result<AlignedStatements> {
    let balance: BTreeSet<Period> = balance_sheet.periods().iter().copied().collect();
    let income: BTreeSet<Period> = income_statement.periods().iter().copied().collect();

    let periods: Vec<Period> = balance
        .iter()
        .rev()
        .filter(|period| income.contains(period))
        .take(lookback_years.max(1))
        .copied()
        .collect();

    if periods.is_empty() {
        return Err(RatioError::Alignment {
            balance_sheet: balance.len(),
            income_statement: income.len(),
        });
    }

    debug!(
        periods = periods.len(),
        shared = balance.intersection(&income).count(),
        lookback_years,
        "aligned statements"
    );

    Ok(AlignedStatements {
        balance_sheet: balance_sheet.restrict(&periods),
        income_statement: income_statement.restrict(&periods),
        cash_flow: cash_flow.restrict(&periods),
        periods,
    })
}
