//! Profitability ratios.

mod basic_earning_power;
mod profit_margin;
mod return_on_equity;

pub use basic_earning_power::BasicEarningPower;
pub use profit_margin::ProfitMargin;
pub use return_on_equity::ReturnOnEquity;
