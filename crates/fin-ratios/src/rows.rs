//! Canonical line items and label resolution.
//!
//! Vendors spell the same line item in many ways ("Total Current Assets",
//! "CurrentAssets", ...). Each [`CanonicalRow`] carries an ordered candidate
//! list, and [`resolve`] is the single lookup every metric goes through.

use crate::{
    AlignedStatements,
    statement::{FinancialStatement, StatementKind},
};
use derive_more::Display;
use polars::prelude::{Expr, col};
use serde::{Deserialize, Serialize};

/// A normalized financial-statement line item.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalRow {
    /// Total current assets
    #[display("Current Assets")]
    CurrentAssets,
    /// Total current liabilities
    #[display("Current Liabilities")]
    CurrentLiabilities,
    /// Total revenue
    #[display("Revenue")]
    Revenue,
    /// Net income
    #[display("Net Income")]
    NetIncome,
    /// Total assets
    #[display("Total Assets")]
    TotalAssets,
    /// Total stockholder equity
    #[display("Stockholder Equity")]
    ShareholderEquity,
    /// Inventory
    #[display("Inventory")]
    Inventory,
    /// Accounts receivable
    #[display("Accounts Receivable")]
    AccountsReceivable,
    /// Total liabilities, derivable from assets and equity
    #[display("Total Liabilities")]
    TotalLiabilities,
    /// Earnings before interest and taxes, derivable from net income
    #[display("EBIT")]
    Ebit,
    /// Interest expense
    #[display("Interest Expense")]
    InterestExpense,
    /// Income tax expense
    #[display("Income Tax")]
    IncomeTax,
}

impl CanonicalRow {
    /// Rows whose absence aborts the computation, in resolution order.
    pub const REQUIRED: [Self; 6] = [
        Self::CurrentAssets,
        Self::CurrentLiabilities,
        Self::Revenue,
        Self::NetIncome,
        Self::TotalAssets,
        Self::ShareholderEquity,
    ];

    /// Rows whose absence triggers a fallback policy.
    pub const OPTIONAL: [Self; 6] = [
        Self::Inventory,
        Self::AccountsReceivable,
        Self::TotalLiabilities,
        Self::Ebit,
        Self::InterestExpense,
        Self::IncomeTax,
    ];

    /// Vendor labels accepted for this row, highest priority first.
    pub const fn candidates(&self) -> &'static [&'static str] {
        match self {
            Self::CurrentAssets => &["Total Current Assets", "CurrentAssets", "Current Assets"],
            Self::CurrentLiabilities => &[
                "Total Current Liabilities",
                "CurrentLiabilities",
                "Current Liabilities",
            ],
            Self::Revenue => &["Total Revenue", "Revenue", "TotalRevenue", "Gross Revenue", "Sales"],
            Self::NetIncome => &[
                "Net Income",
                "NetIncome",
                "Net Income Common Stockholders",
                "Net Income From Continuing Operations",
            ],
            Self::TotalAssets => &["Total Assets", "TotalAssets", "Assets"],
            Self::ShareholderEquity => &[
                "Total Stockholder Equity",
                "StockholderEquity",
                "Stockholders Equity",
                "Total Shareholders Equity",
                "Shareholders Equity",
            ],
            Self::Inventory => &["Inventory", "Inventories", "Total Inventory"],
            Self::AccountsReceivable => &[
                "Net Receivables",
                "Accounts Receivable",
                "AccountsReceivable",
                "Total Receivables",
            ],
            Self::TotalLiabilities => &["Total Liabilities", "TotalLiabilities", "Liabilities"],
            Self::Ebit => &["EBIT", "Operating Income", "OperatingIncome", "Income Before Tax"],
            Self::InterestExpense => &["Interest Expense", "InterestExpense"],
            Self::IncomeTax => &[
                "Income Tax Expense",
                "IncomeTaxExpense",
                "Tax Provision",
                "Provision for Income Taxes",
            ],
        }
    }

    /// The statement this row is read from.
    pub const fn source(&self) -> StatementKind {
        match self {
            Self::Revenue
            | Self::NetIncome
            | Self::Ebit
            | Self::InterestExpense
            | Self::IncomeTax => StatementKind::IncomeStatement,
            _ => StatementKind::BalanceSheet,
        }
    }

    /// Whether an unresolved row is fatal.
    pub const fn is_required(&self) -> bool {
        matches!(
            self,
            Self::CurrentAssets
                | Self::CurrentLiabilities
                | Self::Revenue
                | Self::NetIncome
                | Self::TotalAssets
                | Self::ShareholderEquity
        )
    }

    /// Column name used for this row in the engine's working frame.
    pub const fn column_name(&self) -> &'static str {
        match self {
            Self::CurrentAssets => "current_assets",
            Self::CurrentLiabilities => "current_liabilities",
            Self::Revenue => "revenue",
            Self::NetIncome => "net_income",
            Self::TotalAssets => "total_assets",
            Self::ShareholderEquity => "shareholder_equity",
            Self::Inventory => "inventory",
            Self::AccountsReceivable => "accounts_receivable",
            Self::TotalLiabilities => "total_liabilities",
            Self::Ebit => "ebit",
            Self::InterestExpense => "interest_expense",
            Self::IncomeTax => "income_tax",
        }
    }

    /// Column expression for this row in the engine's working frame.
    pub fn expr(&self) -> Expr {
        col(self.column_name())
    }

    /// Resolve this row against its source statement.
    pub fn resolve<'a>(&self, statements: &'a AlignedStatements) -> Option<ResolvedRow<'a>> {
        resolve(statements.get(self.source()), self.candidates())
    }
}

/// A statement row matched by one of its candidate labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRow<'a> {
    /// The label that matched
    pub label: &'a str,
    /// One value per statement period
    pub values: &'a [Option<f64>],
}

/// Return the first row of `statement` whose label appears in `candidates`.
///
/// Candidates are tried in order, so earlier labels take precedence even when a
/// later one also exists. `None` means no candidate matched.
pub fn resolve<'a>(statement: &'a FinancialStatement, candidates: &[&str]) -> Option<ResolvedRow<'a>> {
    candidates.iter().find_map(|candidate| {
        let label = statement.labels().iter().find(|label| label.as_str() == *candidate)?;
        Some(ResolvedRow {
            label: label.as_str(),
            values: statement.row(label)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Period;
    use rstest::rstest;

    fn statement(labels: &[&str]) -> FinancialStatement {
        let period = Period::from_ymd(2024, 12, 31).unwrap();
        let rows = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.to_string(), vec![Some(i as f64)]))
            .collect();
        FinancialStatement::new(vec![period], rows).unwrap()
    }

    #[test]
    fn test_resolve_prefers_earlier_candidate() {
        let statement = statement(&["Current Assets", "Total Current Assets"]);
        let row = resolve(&statement, CanonicalRow::CurrentAssets.candidates()).unwrap();

        assert_eq!(row.label, "Total Current Assets");
        assert_eq!(row.values, &[Some(1.0)]);
    }

    #[test]
    fn test_resolve_not_found() {
        let statement = statement(&["Cash", "Goodwill"]);
        assert!(resolve(&statement, CanonicalRow::Inventory.candidates()).is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let statement = statement(&["total assets"]);
        assert!(resolve(&statement, CanonicalRow::TotalAssets.candidates()).is_none());
    }

    #[rstest]
    #[case(CanonicalRow::Revenue, "Sales")]
    #[case(CanonicalRow::NetIncome, "Net Income From Continuing Operations")]
    #[case(CanonicalRow::ShareholderEquity, "Stockholders Equity")]
    #[case(CanonicalRow::AccountsReceivable, "Total Receivables")]
    #[case(CanonicalRow::Ebit, "Operating Income")]
    #[case(CanonicalRow::IncomeTax, "Tax Provision")]
    fn test_resolve_vendor_variants(#[case] row: CanonicalRow, #[case] label: &str) {
        let statement = statement(&["Unrelated", label]);
        let resolved = resolve(&statement, row.candidates()).unwrap();
        assert_eq!(resolved.label, label);
    }

    #[test]
    fn test_required_and_optional_partition() {
        for row in CanonicalRow::REQUIRED {
            assert!(row.is_required());
        }
        for row in CanonicalRow::OPTIONAL {
            assert!(!row.is_required());
        }
    }

    #[test]
    fn test_row_sources() {
        assert_eq!(CanonicalRow::Revenue.source(), StatementKind::IncomeStatement);
        assert_eq!(CanonicalRow::Ebit.source(), StatementKind::IncomeStatement);
        assert_eq!(CanonicalRow::Inventory.source(), StatementKind::BalanceSheet);
        assert_eq!(CanonicalRow::TotalLiabilities.source(), StatementKind::BalanceSheet);
    }
}
