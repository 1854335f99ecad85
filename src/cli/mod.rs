//! CLI command handlers
//!
//! Bridges clap argument parsing with the metrics engine and the record
//! store. Handlers print to stdout and return errors to `main`.

pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod ingest;
pub mod subscription;
pub mod wishlist;

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::{handle_check, handle_forecast, handle_limits, handle_status};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import, ExportCommands};
pub use ingest::handle_log;
pub use subscription::{handle_subscription_command, SubscriptionCommands};
pub use wishlist::{handle_wishlist_command, WishlistCommands};

use crate::error::{MonospendError, MonospendResult};
use crate::models::Category;

/// Resolve a category name given on the command line
///
/// Unlike free-text entry, an unknown name here is an error.
pub fn parse_category(label: &str) -> MonospendResult<Category> {
    Category::ALL
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| {
            let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
            MonospendError::Validation(format!(
                "Unknown category '{}'. Expected one of: {}",
                label,
                names.join(", ")
            ))
        })
}

/// Find the single record a user reference points at
pub(crate) fn locate<T>(
    items: &[T],
    reference: &str,
    matches: impl Fn(&T, &str) -> bool,
    not_found: impl FnOnce(String) -> MonospendError,
) -> MonospendResult<usize> {
    let hits: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item, reference))
        .map(|(i, _)| i)
        .collect();

    match hits.as_slice() {
        [index] => Ok(*index),
        [] => Err(not_found(reference.to_string())),
        _ => Err(MonospendError::Validation(format!(
            "'{}' matches {} records, use a longer id",
            reference,
            hits.len()
        ))),
    }
}
