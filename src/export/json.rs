//! JSON snapshot export
//!
//! Exports every record collection to JSON with schema versioning, and reads
//! such a snapshot back for restore.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MonospendError, MonospendResult};
use crate::models::{BudgetConfiguration, Expense, Records, Subscription, WishlistItem};

/// Current snapshot schema version
pub const SCHEMA_VERSION: &str = "1.0";

/// Full snapshot of the user's records
///
/// `expenses` and `budgets` are required on import; the remaining
/// collections default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    #[serde(alias = "version")]
    pub schema_version: String,

    /// Export timestamp
    #[serde(alias = "exportedAt")]
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    #[serde(default)]
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub budgets: BudgetConfiguration,

    #[serde(default)]
    pub subscriptions: Vec<Subscription>,

    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
}

impl Snapshot {
    /// Capture the given records
    pub fn from_records(records: &Records) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: records.expenses.clone(),
            budgets: records.budgets.clone(),
            subscriptions: records.subscriptions.clone(),
            wishlist: records.wishlist.clone(),
        }
    }

    /// Turn the snapshot back into records
    pub fn into_records(self) -> Records {
        Records {
            expenses: self.expenses,
            subscriptions: self.subscriptions,
            budgets: self.budgets,
            wishlist: self.wishlist,
        }
    }

    /// Validate the snapshot structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id.as_str()) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
            if expense.amount.is_negative() {
                return Err(format!("Expense {} has a negative amount", expense.id));
            }
        }

        if self.budgets.income.is_negative() || self.budgets.total_limit.is_negative() {
            return Err("Budget income and total limit must not be negative".into());
        }
        if let Some((category, _)) = self
            .budgets
            .category_limits
            .iter()
            .find(|(_, limit)| limit.is_negative())
        {
            return Err(format!("Limit for {} must not be negative", category));
        }

        let mut seen = HashSet::new();
        for sub in &self.subscriptions {
            if !seen.insert(sub.id.as_str()) {
                return Err(format!("Duplicate subscription id {}", sub.id));
            }
        }

        Ok(())
    }
}

/// Export records as a JSON snapshot
pub fn export_json<W: Write>(records: &Records, writer: &mut W, pretty: bool) -> MonospendResult<()> {
    let snapshot = Snapshot::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| MonospendError::Export(e.to_string()))?;

    tracing::info!(expenses = snapshot.expenses.len(), "exported JSON snapshot");
    Ok(())
}

/// Import a JSON snapshot
pub fn import_from_json(json_str: &str) -> MonospendResult<Snapshot> {
    let snapshot: Snapshot =
        serde_json::from_str(json_str).map_err(|e| MonospendError::Import(e.to_string()))?;

    snapshot.validate().map_err(MonospendError::Import)?;

    tracing::info!(expenses = snapshot.expenses.len(), "imported JSON snapshot");
    Ok(snapshot)
}
