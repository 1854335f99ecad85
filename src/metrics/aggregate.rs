//! Temporal aggregation over the expense log
//!
//! Month filters use the calendar month and year of each expense date, not a
//! rolling 30-day window. The `exclude_from_stats` flag is deliberately
//! ignored by every sum in this module; it only narrows
//! [`stats_eligible`].

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};

use crate::models::{Category, Expense, Money};

/// Sum all expenses dated in the given calendar month and year
///
/// Accepts any borrowed sequence, so it composes with [`filter_by_category`].
pub fn sum_for_calendar_month<'a, I>(expenses: I, month: u32, year: i32) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| in_month(e.date, month, year))
        .map(|e| e.amount)
        .sum()
}

/// Sum of the calendar month containing `today`
pub fn sum_for_month_of<'a, I>(expenses: I, today: NaiveDate) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    sum_for_calendar_month(expenses, today.month(), today.year())
}

/// Sum expenses with `start <= date <= end`
pub fn sum_in_range<'a, I>(expenses: I, start: NaiveDate, end: NaiveDate) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.date >= start && e.date <= end)
        .map(|e| e.amount)
        .sum()
}

/// Expenses in exactly this category
pub fn filter_by_category(expenses: &[Expense], category: Category) -> Vec<&Expense> {
    expenses.iter().filter(|e| e.category == category).collect()
}

/// Expenses with `start <= date <= end`, in log order
pub fn filter_in_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect()
}

/// Total spend per calendar day
pub fn daily_totals<'a, I>(expenses: I) -> BTreeMap<NaiveDate, Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Fraction of overall spend, 0.0..=1.0
    pub share: f64,
}

/// Spending per category, largest first
pub fn category_breakdown<'a, I>(expenses: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: HashMap<Category, Money> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
    }

    // Clamp to one cent so an all-zero log still divides cleanly
    let overall = totals.values().sum::<Money>().cents().max(1) as f64;

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category,
            total,
            share: total.cents() as f64 / overall,
        })
        .collect();

    shares.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    shares
}

/// The most recent `limit` expenses that may be narrated
///
/// Ordered newest first. This is the only consumer of `exclude_from_stats`.
pub fn stats_eligible(expenses: &[Expense], limit: usize) -> Vec<&Expense> {
    let mut eligible: Vec<&Expense> = expenses.iter().filter(|e| !e.exclude_from_stats).collect();
    eligible.sort_by(|a, b| b.date.cmp(&a.date));
    eligible.truncate(limit);
    eligible
}

fn in_month(date: NaiveDate, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}
