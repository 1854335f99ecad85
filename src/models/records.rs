//! The full set of user records as held by a store

use serde::{Deserialize, Serialize};

use super::{BudgetConfiguration, Expense, Subscription, WishlistItem};

/// Every collection the dashboard reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub budgets: BudgetConfiguration,
    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
}
