//! Burn-rate forecaster
//!
//! Projects how many days the current reserves last at the trailing
//! three-month spend velocity.

use chrono::{Months, NaiveDate};

use crate::models::{Expense, Money};

/// Minimum total history before any forecast is attempted
pub const MIN_FORECAST_HISTORY: usize = 5;

/// Length of the trailing window, in calendar months
pub const FORECAST_WINDOW_MONTHS: u32 = 3;

/// Default threshold below which a forecast is considered critical
pub const DEFAULT_CRITICAL_DAYS: i64 = 30;

/// A depletion projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastResult {
    /// Average spend per day over the window
    pub daily_burn: f64,
    /// Whole days until reserves run out; may be negative or very large
    pub days_until_depletion: i64,
}

impl ForecastResult {
    pub fn is_critical(&self, threshold_days: i64) -> bool {
        self.days_until_depletion < threshold_days
    }
}

/// Start of the trailing window ending at `today`
///
/// Month-end days clamp to the last day of the shorter month: the window for
/// May 31 starts on February 28.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(FORECAST_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Project reserve depletion, or `None` when there is not enough data
///
/// The raw projection is returned even for non-positive reserves; use
/// [`visible_forecast`] for what a dashboard should show.
pub fn forecast_depletion(
    expenses: &[Expense],
    current_reserves: f64,
    today: NaiveDate,
) -> Option<ForecastResult> {
    if expenses.len() < MIN_FORECAST_HISTORY {
        return None;
    }

    let start = window_start(today);
    let window: Vec<&Expense> = expenses.iter().filter(|e| e.date >= start).collect();

    let earliest = window.iter().map(|e| e.date).min()?;
    let total_spent: Money = window.iter().map(|e| e.amount).sum();

    let days_elapsed = (today - earliest).num_days().max(1);
    let daily_burn = total_spent.as_f64() / days_elapsed as f64;

    if daily_burn <= 0.0 {
        return None;
    }

    Some(ForecastResult {
        daily_burn,
        days_until_depletion: (current_reserves / daily_burn).floor() as i64,
    })
}

/// The forecast a caller should display
///
/// Suppressed whenever reserves are zero or negative: that is treated as
/// invalid input rather than "zero days left".
pub fn visible_forecast(
    expenses: &[Expense],
    current_reserves: f64,
    today: NaiveDate,
) -> Option<ForecastResult> {
    if current_reserves <= 0.0 {
        return None;
    }
    forecast_depletion(expenses, current_reserves, today)
}
