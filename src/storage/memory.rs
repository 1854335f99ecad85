//! In-memory record store

use crate::error::MonospendResult;
use crate::models::{BudgetConfiguration, Expense, Records, Subscription, WishlistItem};

use super::store::RecordStore;

/// Holds records in memory; nothing touches disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records
    pub fn with_records(records: Records) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn load_expenses(&self) -> MonospendResult<Vec<Expense>> {
        Ok(self.records.expenses.clone())
    }

    fn save_expenses(&mut self, expenses: &[Expense]) -> MonospendResult<()> {
        self.records.expenses = expenses.to_vec();
        Ok(())
    }

    fn load_subscriptions(&self) -> MonospendResult<Vec<Subscription>> {
        Ok(self.records.subscriptions.clone())
    }

    fn save_subscriptions(&mut self, subscriptions: &[Subscription]) -> MonospendResult<()> {
        self.records.subscriptions = subscriptions.to_vec();
        Ok(())
    }

    fn load_budgets(&self) -> MonospendResult<BudgetConfiguration> {
        Ok(self.records.budgets.clone())
    }

    fn save_budgets(&mut self, budgets: &BudgetConfiguration) -> MonospendResult<()> {
        self.records.budgets = budgets.clone();
        Ok(())
    }

    fn load_wishlist(&self) -> MonospendResult<Vec<WishlistItem>> {
        Ok(self.records.wishlist.clone())
    }

    fn save_wishlist(&mut self, items: &[WishlistItem]) -> MonospendResult<()> {
        self.records.wishlist = items.to_vec();
        Ok(())
    }
}
