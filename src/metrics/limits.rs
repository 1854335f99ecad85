//! Category limiter
//!
//! Compares this month's spend in each monitored category against its
//! configured limit. Categories without a positive limit are not reported.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::aggregate::{filter_by_category, sum_for_calendar_month};
use crate::models::{BudgetConfiguration, Category, Expense, Money};

/// Usage ratio above which a category is flagged as a warning (80%)
pub const WARNING_RATIO_NUM: i64 = 4;
pub const WARNING_RATIO_DEN: i64 = 5;

/// Status of one category against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStatus {
    Nominal,
    Warning,
    /// Spend exceeds the limit
    Clipping,
}

impl LimitStatus {
    /// Classify `spent` against a positive `limit`
    ///
    /// Uses integer cents so the 80% boundary is exact.
    pub fn classify(spent: Money, limit: Money) -> Self {
        if spent > limit {
            Self::Clipping
        } else if spent.cents() * WARNING_RATIO_DEN > limit.cents() * WARNING_RATIO_NUM {
            Self::Warning
        } else {
            Self::Nominal
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal => write!(f, "NOMINAL"),
            Self::Warning => write!(f, "WARNING"),
            Self::Clipping => write!(f, "CLIPPING"),
        }
    }
}

/// One monitored category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLimitRow {
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    /// Fill level for a bar, clamped to 100
    pub percent: f64,
    pub status: LimitStatus,
}

impl CategoryLimitRow {
    pub fn is_clipping(&self) -> bool {
        self.status == LimitStatus::Clipping
    }
}

/// Status of every monitored category for the month containing `today`
pub fn category_limit_report(
    expenses: &[Expense],
    config: &BudgetConfiguration,
    today: NaiveDate,
) -> Vec<CategoryLimitRow> {
    config
        .category_limits
        .iter()
        .filter(|(_, limit)| limit.is_positive())
        .map(|(&category, &limit)| {
            let spent = sum_for_calendar_month(
                filter_by_category(expenses, category),
                today.month(),
                today.year(),
            );
            CategoryLimitRow {
                category,
                limit,
                spent,
                percent: (spent.as_f64() / limit.as_f64() * 100.0).min(100.0),
                status: LimitStatus::classify(spent, limit),
            }
        })
        .collect()
}
