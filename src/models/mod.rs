//! Core data models for monospend
//!
//! Records owned by the store (expenses, subscriptions, the budget
//! configuration, wishlist goals) and the value types they are built from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod records;
pub mod subscription;
pub mod wishlist;

pub use budget::BudgetConfiguration;
pub use category::Category;
pub use expense::Expense;
pub use ids::{ExpenseId, SubscriptionId, WishlistItemId};
pub use money::Money;
pub use records::Records;
pub use subscription::{Frequency, Subscription};
pub use wishlist::WishlistItem;
