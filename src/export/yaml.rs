//! YAML snapshot export
//!
//! Same content as the JSON snapshot, for human-readable backups.

use std::io::Write;

use crate::error::{MonospendError, MonospendResult};
use crate::export::json::Snapshot;
use crate::models::Records;

fn export_err(e: impl std::fmt::Display) -> MonospendError {
    MonospendError::Export(e.to_string())
}

/// Export records as a YAML snapshot with a comment header
pub fn export_yaml<W: Write>(records: &Records, writer: &mut W) -> MonospendResult<()> {
    let snapshot = Snapshot::from_records(records);

    writeln!(writer, "# monospend snapshot").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(writer, "# Restore with `monospend import <file>`.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(export_err)?;

    tracing::info!(expenses = snapshot.expenses.len(), "exported YAML snapshot");
    Ok(())
}

/// Import a YAML snapshot
pub fn import_from_yaml(yaml_str: &str) -> MonospendResult<Snapshot> {
    let snapshot: Snapshot =
        serde_yaml::from_str(yaml_str).map_err(|e| MonospendError::Import(e.to_string()))?;

    snapshot.validate().map_err(MonospendError::Import)?;

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetConfiguration, Category, Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_and_import() {
        let records = Records {
            expenses: vec![Expense::new(
                Money::from_dollars(30),
                Category::Entertainment,
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            )
            .with_description("Cinema: \"late show\"")],
            budgets: BudgetConfiguration::new(Money::from_dollars(1800), Money::from_dollars(900)),
            ..Records::default()
        };

        let mut output = Vec::new();
        export_yaml(&records, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# monospend snapshot"));
        assert!(yaml.contains("schema_version"));

        let snapshot = import_from_yaml(&yaml).unwrap();
        assert_eq!(snapshot.into_records(), records);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = import_from_yaml("expenses: [unclosed").unwrap_err();
        assert!(matches!(err, MonospendError::Import(_)));
    }
}
