//! Efficiency ratios.
//!
//! Measure how effectively a company turns its assets and receivables into
//! revenue.

mod current_asset_turnover;
mod days_sales_outstanding;
mod total_asset_turnover;

pub use current_asset_turnover::CurrentAssetTurnover;
pub use days_sales_outstanding::{DaysSalesOutstanding, DaysSalesOutstandingConfig};
pub use total_asset_turnover::TotalAssetTurnover;
