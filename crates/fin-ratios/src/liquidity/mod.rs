//! Liquidity ratios.
//!
//! Measure a company's ability to meet short-term obligations from short-term
//! assets.

mod current_ratio;
mod quick_ratio;

pub use current_ratio::CurrentRatio;
pub use quick_ratio::QuickRatio;
