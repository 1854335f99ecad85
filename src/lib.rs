//! monospend - personal budgeting dashboard engine
//!
//! This library derives everything a spending dashboard shows from a log of
//! expenses, a list of subscriptions and a budget configuration: month
//! spend, reserves, daily allowance, system load, hull integrity, category
//! limit status, abnormal-spend detection and a reserve depletion forecast.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core records (expenses, subscriptions, budgets, wishlist)
//! - `metrics`: Pure derived-metric and anomaly functions
//! - `ingest`: Data-entry boundary with the anomaly hold
//! - `storage`: JSON file storage behind the `RecordStore` trait
//! - `export`: JSON/YAML snapshots and CSV
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `monospend` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use monospend::config::MonospendPaths;
//! use monospend::metrics::DashboardSnapshot;
//! use monospend::storage::{JsonFileStore, RecordStore};
//!
//! let store = JsonFileStore::open(MonospendPaths::new()?)?;
//! let records = store.load_all()?;
//! let snapshot = DashboardSnapshot::compute(&records, today, 30);
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod storage;

pub use error::{MonospendError, MonospendResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// Without `verbose`, `RUST_LOG` decides and defaults to `monospend=warn`.
/// With `verbose`, crate events at debug level are always shown. Output goes
/// to stderr.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = if verbose {
            let filter = EnvFilter::from_default_env();
            match "monospend=debug".parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("monospend=warn"))
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init_tracing(false);
        super::init_tracing(true);
    }
}
