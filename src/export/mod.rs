//! Export module for monospend
//!
//! - CSV: the expense log (spreadsheet-compatible), export and import
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, import_expenses_csv, CSV_HEADER};
pub use json::{export_json, import_from_json, Snapshot, SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
