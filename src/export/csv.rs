//! CSV export and import of the expense log
//!
//! Format: header `ID,Date,Category,Description,Amount`, one expense per
//! line, description always quoted, amount with two decimals.

use std::io::{Read, Write};

use chrono::NaiveDate;

use crate::error::{MonospendError, MonospendResult};
use crate::models::{Category, Expense, ExpenseId, Money};

/// Column header written and expected by this module
pub const CSV_HEADER: &str = "ID,Date,Category,Description,Amount";

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> MonospendResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| MonospendError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{:.2}",
            expense.id,
            expense.date,
            expense.category,
            quote(&expense.description),
            expense.amount.as_f64()
        )
        .map_err(|e| MonospendError::Export(e.to_string()))?;
    }

    tracing::info!(rows = expenses.len(), "exported expense CSV");
    Ok(())
}

/// Import expenses from CSV written by [`export_expenses_csv`]
///
/// Malformed amounts become zero and unknown categories become `Other`.
/// Rows without an id get a fresh one. A malformed date fails the import.
pub fn import_expenses_csv<R: Read>(reader: R) -> MonospendResult<Vec<Expense>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut expenses = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // Header is line 1
        let line = index + 2;
        let record = result.map_err(|e| MonospendError::Import(format!("Line {}: {}", line, e)))?;

        let field = |i: usize| record.get(i).unwrap_or("");

        let date = NaiveDate::parse_from_str(field(1), "%Y-%m-%d").map_err(|_| {
            MonospendError::Import(format!("Line {}: invalid date '{}'", line, field(1)))
        })?;

        let mut expense = Expense::new(
            Money::parse_or_zero(field(4)),
            Category::resolve(field(2)),
            date,
        )
        .with_description(field(3));

        if !field(0).is_empty() {
            expense.id = ExpenseId::from_raw(field(0));
        }

        expenses.push(expense);
    }

    tracing::info!(rows = expenses.len(), "imported expense CSV");
    Ok(expenses)
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(cents: i64, category: Category, description: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        )
        .with_description(description)
    }

    #[test]
    fn test_export_format() {
        let mut e = expense(1250, Category::Food, "Pizza, \"large\"");
        e.id = ExpenseId::from_raw("exp-1");

        let mut output = Vec::new();
        export_expenses_csv(&[e], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert_eq!(
            csv,
            "ID,Date,Category,Description,Amount\nexp-1,2025-03-09,Food,\"Pizza, \"\"large\"\"\",12.50\n"
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_import_reads_export() {
        let original = vec![
            expense(999, Category::Tech, "Cable"),
            expense(4000, Category::Utilities, "Power, March"),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&original, &mut output).unwrap();

        let imported = import_expenses_csv(output.as_slice()).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn test_import_coerces_bad_values() {
        let data = "ID,Date,Category,Description,Amount\n,2025-04-01,Snacks,\"Chips\",abc\n";
        let imported = import_expenses_csv(data.as_bytes()).unwrap();

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].amount, Money::zero());
        assert_eq!(imported[0].category, Category::Other);
        assert!(imported[0].id.as_str().starts_with("exp-"));
    }

    #[test]
    fn test_import_rejects_bad_date() {
        let data = "ID,Date,Category,Description,Amount\nexp-1,04/01/2025,Food,\"Chips\",2.00\n";
        let err = import_expenses_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }
}
