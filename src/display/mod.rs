//! Display formatting for terminal output

pub mod dashboard;
pub mod records;
pub mod report;

pub use dashboard::{format_forecast, format_limits, format_status};
pub use records::{format_budget, format_expense_list, format_subscription_list, format_wishlist};
