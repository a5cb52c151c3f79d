//! Solvency ratios.

mod debt_ratio;

pub use debt_ratio::DebtRatio;
