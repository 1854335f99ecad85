//! Collection documents and their files
//!
//! Every collection is stored as one JSON document. A [`Document`] says how
//! its records are wrapped on disk; a [`DocumentFile`] reads a missing file as
//! an empty collection and replaces files through a sibling temp file, so a
//! crash mid-write leaves the previous version in place.

use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{MonospendError, MonospendResult};
use crate::models::{BudgetConfiguration, Expense, Subscription, WishlistItem};

/// On-disk shape of one record collection
pub trait Document: Serialize + DeserializeOwned + Default {
    type Records;

    fn wrap(records: Self::Records) -> Self;
    fn into_records(self) -> Self::Records;
}

/// `{"expenses": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpenseDocument {
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Document for ExpenseDocument {
    type Records = Vec<Expense>;

    fn wrap(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    fn into_records(self) -> Vec<Expense> {
        self.expenses
    }
}

/// `{"subscriptions": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubscriptionDocument {
    #[serde(default)]
    subscriptions: Vec<Subscription>,
}

impl Document for SubscriptionDocument {
    type Records = Vec<Subscription>;

    fn wrap(subscriptions: Vec<Subscription>) -> Self {
        Self { subscriptions }
    }

    fn into_records(self) -> Vec<Subscription> {
        self.subscriptions
    }
}

/// `{"items": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WishlistDocument {
    #[serde(default)]
    items: Vec<WishlistItem>,
}

impl Document for WishlistDocument {
    type Records = Vec<WishlistItem>;

    fn wrap(items: Vec<WishlistItem>) -> Self {
        Self { items }
    }

    fn into_records(self) -> Vec<WishlistItem> {
        self.items
    }
}

/// The budget configuration is stored bare
impl Document for BudgetConfiguration {
    type Records = BudgetConfiguration;

    fn wrap(records: BudgetConfiguration) -> Self {
        records
    }

    fn into_records(self) -> BudgetConfiguration {
        self
    }
}

/// Typed handle on a document's file
#[derive(Debug, Clone)]
pub struct DocumentFile<D> {
    path: PathBuf,
    document: PhantomData<fn() -> D>,
}

impl<D: Document> DocumentFile<D> {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection; a missing file is an empty one
    pub fn load(&self) -> MonospendResult<D::Records> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(path = %self.path.display(), "no file, empty collection");
                return Ok(D::default().into_records());
            }
            Err(e) => return Err(self.failure("read", e)),
        };

        let document: D = serde_json::from_slice(&bytes).map_err(|e| {
            MonospendError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(document.into_records())
    }

    /// Replace the file with the given collection
    pub fn save(&self, records: D::Records) -> MonospendResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| self.failure("create directory for", e))?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.failure("stage", e))?;
        serde_json::to_writer_pretty(&mut staged, &D::wrap(records)).map_err(|e| {
            MonospendError::Storage(format!("Failed to serialize {}: {}", self.path.display(), e))
        })?;
        staged.flush().map_err(|e| self.failure("flush", e))?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| self.failure("sync", e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.failure("replace", e.error))?;

        tracing::debug!(path = %self.path.display(), "wrote collection");
        Ok(())
    }

    fn failure(&self, action: &str, err: io::Error) -> MonospendError {
        MonospendError::Storage(format!("Failed to {} {}: {}", action, self.path.display(), err))
    }
}
