//! CLI commands for data export and import

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{MonospendError, MonospendResult};
use crate::export::{csv, json, yaml};
use crate::storage::RecordStore;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Full snapshot as JSON
    Json {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Full snapshot as YAML
    Yaml {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expense log as CSV
    Csv {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    Json,
    Yaml,
    Csv,
}

impl ImportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

fn open_output(output: &Option<PathBuf>) -> MonospendResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                MonospendError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn finish(mut writer: Box<dyn Write>, output: &Option<PathBuf>, what: &str) -> MonospendResult<()> {
    writer
        .flush()
        .map_err(|e| MonospendError::Export(e.to_string()))?;
    if let Some(path) = output {
        println!("{} exported to: {}", what, path.display());
    }
    Ok(())
}

/// Handle export commands
pub fn handle_export_command<S: RecordStore>(store: &S, cmd: ExportCommands) -> MonospendResult<()> {
    let records = store.load_all()?;

    match cmd {
        ExportCommands::Json { output, pretty } => {
            let mut writer = open_output(&output)?;
            json::export_json(&records, &mut writer, pretty)?;
            if output.is_none() {
                writeln!(writer).map_err(|e| MonospendError::Export(e.to_string()))?;
            }
            finish(writer, &output, "Snapshot")
        }
        ExportCommands::Yaml { output } => {
            let mut writer = open_output(&output)?;
            yaml::export_yaml(&records, &mut writer)?;
            finish(writer, &output, "Snapshot")
        }
        ExportCommands::Csv { output } => {
            let mut writer = open_output(&output)?;
            csv::export_expenses_csv(&records.expenses, &mut writer)?;
            finish(writer, &output, "Expense log")
        }
    }
}

/// Import a snapshot (replacing all records) or a CSV log (appending)
pub fn handle_import<S: RecordStore>(
    store: &mut S,
    file: &Path,
    format: Option<ImportFormat>,
) -> MonospendResult<()> {
    if !file.exists() {
        return Err(MonospendError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let format = format.or_else(|| ImportFormat::from_path(file)).ok_or_else(|| {
        MonospendError::Import(format!(
            "Cannot tell the format of {}; pass --format",
            file.display()
        ))
    })?;

    let content = std::fs::read_to_string(file)
        .map_err(|e| MonospendError::Import(format!("Failed to read file: {}", e)))?;

    match format {
        ImportFormat::Json | ImportFormat::Yaml => {
            let snapshot = if format == ImportFormat::Json {
                json::import_from_json(&content)?
            } else {
                yaml::import_from_yaml(&content)?
            };
            let records = snapshot.into_records();
            store.save_all(&records)?;
            println!(
                "System restored: {} expenses, {} subscriptions, {} wishlist items",
                records.expenses.len(),
                records.subscriptions.len(),
                records.wishlist.len()
            );
        }
        ImportFormat::Csv => {
            let imported = csv::import_expenses_csv(content.as_bytes())?;
            let mut expenses = store.load_expenses()?;

            // Ids already stored or seen earlier in the file are skipped
            let mut seen: HashSet<String> =
                expenses.iter().map(|e| e.id.as_str().to_string()).collect();
            let total = imported.len();
            let new: Vec<_> = imported
                .into_iter()
                .filter(|e| seen.insert(e.id.as_str().to_string()))
                .collect();
            let added = new.len();

            expenses.extend(new);
            store.save_expenses(&expenses)?;
            println!(
                "Imported {} expenses ({} duplicates skipped)",
                added,
                total - added
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetConfiguration, Category, Expense, Money, Records};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(day: u32) -> Expense {
        Expense::new(
            Money::from_dollars(day as i64),
            Category::Shopping,
            NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
        )
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ImportFormat::from_path(Path::new("backup.JSON")),
            Some(ImportFormat::Json)
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("b.yml")),
            Some(ImportFormat::Yaml)
        );
        assert_eq!(ImportFormat::from_path(Path::new("log")), None);
    }

    #[test]
    fn test_json_import_replaces_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");

        let source = Records {
            expenses: vec![expense(1), expense(2)],
            budgets: BudgetConfiguration::new(Money::from_dollars(900), Money::zero()),
            ..Records::default()
        };
        let mut file = File::create(&path).unwrap();
        json::export_json(&source, &mut file, false).unwrap();

        let mut store = MemoryStore::with_records(Records {
            expenses: vec![expense(9)],
            ..Records::default()
        });
        handle_import(&mut store, &path, None).unwrap();

        assert_eq!(store.records(), &source);
    }

    #[test]
    fn test_csv_import_skips_known_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.csv");

        let known = expense(3);
        let mut file = File::create(&path).unwrap();
        csv::export_expenses_csv(&[known.clone(), expense(4)], &mut file).unwrap();

        let mut store = MemoryStore::with_records(Records {
            expenses: vec![known],
            ..Records::default()
        });
        handle_import(&mut store, &path, None).unwrap();

        assert_eq!(store.records().expenses.len(), 2);
    }

    #[test]
    fn test_csv_import_skips_ids_repeated_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.csv");

        let twice = expense(5);
        let mut file = File::create(&path).unwrap();
        csv::export_expenses_csv(&[twice.clone(), expense(6), twice.clone()], &mut file).unwrap();

        let mut store = MemoryStore::new();
        handle_import(&mut store, &path, None).unwrap();

        let expenses = &store.records().expenses;
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses.iter().filter(|e| e.id == twice.id).count(), 1);
    }

    #[test]
    fn test_import_missing_file() {
        let mut store = MemoryStore::new();
        let err = handle_import(&mut store, Path::new("/nonexistent/x.json"), None).unwrap_err();
        assert!(matches!(err, MonospendError::Import(_)));
    }
}
