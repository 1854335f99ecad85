//! Expense model
//!
//! An expense is a single logged outflow. Amounts are non-negative; the
//! record is immutable once created except for deletion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Free-text description, stored as entered
    #[serde(default)]
    pub description: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Hide from narrated insights; still counted in every metric
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude_from_stats: bool,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(amount: Money, category: Category, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            amount: amount.non_negative(),
            category,
            description: String::new(),
            date,
            exclude_from_stats: false,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style stats exclusion setter
    pub fn excluded_from_stats(mut self, exclude: bool) -> Self {
        self.exclude_from_stats = exclude;
        self
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense_clamps_negative_amount() {
        let expense = Expense::new(Money::from_cents(-500), Category::Food, date(2025, 1, 3));
        assert_eq!(expense.amount, Money::zero());
    }

    #[test]
    fn test_serde_shape() {
        let expense = Expense {
            id: ExpenseId::from_raw("abc"),
            amount: Money::from_cents(1250),
            category: Category::Transport,
            description: "Bus pass".into(),
            date: date(2025, 3, 14),
            exclude_from_stats: true,
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["amount"], 12.5);
        assert_eq!(json["category"], "Transport");
        assert_eq!(json["date"], "2025-03-14");
        assert_eq!(json["excludeFromStats"], true);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"x1","amount":3,"category":"Snacks","date":"2025-02-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, Money::from_dollars(3));
        assert_eq!(expense.category, Category::Other);
        assert!(expense.description.is_empty());
        assert!(!expense.exclude_from_stats);
    }
}
