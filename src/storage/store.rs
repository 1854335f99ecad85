//! Record store abstraction and its JSON file adapter
//!
//! Each collection lives in its own file under the data directory so that a
//! single mutation rewrites only what changed.

use super::document::{DocumentFile, ExpenseDocument, SubscriptionDocument, WishlistDocument};
use crate::config::paths::MonospendPaths;
use crate::error::MonospendResult;
use crate::models::{BudgetConfiguration, Expense, Records, Subscription, WishlistItem};

/// Persistence for the four user collections
pub trait RecordStore {
    fn load_expenses(&self) -> MonospendResult<Vec<Expense>>;
    fn save_expenses(&mut self, expenses: &[Expense]) -> MonospendResult<()>;

    fn load_subscriptions(&self) -> MonospendResult<Vec<Subscription>>;
    fn save_subscriptions(&mut self, subscriptions: &[Subscription]) -> MonospendResult<()>;

    fn load_budgets(&self) -> MonospendResult<BudgetConfiguration>;
    fn save_budgets(&mut self, budgets: &BudgetConfiguration) -> MonospendResult<()>;

    fn load_wishlist(&self) -> MonospendResult<Vec<WishlistItem>>;
    fn save_wishlist(&mut self, items: &[WishlistItem]) -> MonospendResult<()>;

    /// Load every collection
    fn load_all(&self) -> MonospendResult<Records> {
        Ok(Records {
            expenses: self.load_expenses()?,
            subscriptions: self.load_subscriptions()?,
            budgets: self.load_budgets()?,
            wishlist: self.load_wishlist()?,
        })
    }

    /// Replace every collection
    fn save_all(&mut self, records: &Records) -> MonospendResult<()> {
        self.save_expenses(&records.expenses)?;
        self.save_subscriptions(&records.subscriptions)?;
        self.save_budgets(&records.budgets)?;
        self.save_wishlist(&records.wishlist)
    }
}

/// Stores records as JSON files under the data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: MonospendPaths,
}

impl JsonFileStore {
    /// Open a store, creating the directory layout if needed
    pub fn open(paths: MonospendPaths) -> MonospendResult<Self> {
        paths.ensure_directories()?;
        tracing::debug!(data_dir = %paths.data_dir().display(), "opened record store");
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &MonospendPaths {
        &self.paths
    }
}

impl RecordStore for JsonFileStore {
    fn load_expenses(&self) -> MonospendResult<Vec<Expense>> {
        DocumentFile::<ExpenseDocument>::at(self.paths.expenses_file()).load()
    }

    fn save_expenses(&mut self, expenses: &[Expense]) -> MonospendResult<()> {
        let mut expenses = expenses.to_vec();
        // Newest first, matching how the log is read back
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        DocumentFile::<ExpenseDocument>::at(self.paths.expenses_file())
            .save(expenses)
    }

    fn load_subscriptions(&self) -> MonospendResult<Vec<Subscription>> {
        DocumentFile::<SubscriptionDocument>::at(self.paths.subscriptions_file())
            .load()
    }

    fn save_subscriptions(&mut self, subscriptions: &[Subscription]) -> MonospendResult<()> {
        DocumentFile::<SubscriptionDocument>::at(self.paths.subscriptions_file())
            .save(subscriptions.to_vec())
    }

    fn load_budgets(&self) -> MonospendResult<BudgetConfiguration> {
        DocumentFile::<BudgetConfiguration>::at(self.paths.budgets_file())
            .load()
    }

    fn save_budgets(&mut self, budgets: &BudgetConfiguration) -> MonospendResult<()> {
        DocumentFile::<BudgetConfiguration>::at(self.paths.budgets_file())
            .save(budgets.clone())
    }

    fn load_wishlist(&self) -> MonospendResult<Vec<WishlistItem>> {
        DocumentFile::<WishlistDocument>::at(self.paths.wishlist_file())
            .load()
    }

    fn save_wishlist(&mut self, items: &[WishlistItem]) -> MonospendResult<()> {
        DocumentFile::<WishlistDocument>::at(self.paths.wishlist_file())
            .save(items.to_vec())
    }
}
