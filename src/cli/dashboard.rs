//! Read-only dashboard commands: status, limits, forecast and check

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::report::format_amount;
use crate::display::{format_forecast, format_limits, format_status};
use crate::error::MonospendResult;
use crate::metrics::{
    category_limit_report, check_anomaly, filter_by_category, DashboardSnapshot,
    MIN_ANOMALY_SAMPLES,
};
use crate::models::Money;
use crate::storage::RecordStore;

use super::parse_category;

/// Print the full dashboard for `today`
pub fn handle_status<S: RecordStore>(
    store: &S,
    settings: &Settings,
    today: NaiveDate,
) -> MonospendResult<()> {
    let records = store.load_all()?;
    let snapshot = DashboardSnapshot::compute(&records, today, settings.critical_depletion_days);
    print!("{}", format_status(&snapshot, settings));
    Ok(())
}

/// Print the category limit table; returns how many categories are clipping
pub fn handle_limits<S: RecordStore>(
    store: &S,
    settings: &Settings,
    today: NaiveDate,
) -> MonospendResult<usize> {
    let expenses = store.load_expenses()?;
    let budgets = store.load_budgets()?;
    let rows = category_limit_report(&expenses, &budgets, today);
    print!("{}", format_limits(&rows, settings));
    Ok(rows.iter().filter(|r| r.is_clipping()).count())
}

pub fn handle_forecast<S: RecordStore>(
    store: &S,
    settings: &Settings,
    today: NaiveDate,
) -> MonospendResult<()> {
    let records = store.load_all()?;
    let snapshot = DashboardSnapshot::compute(&records, today, settings.critical_depletion_days);

    println!(
        "Reserves: {}",
        format_amount(snapshot.budget.current_reserves, &settings.currency_symbol)
    );
    print!(
        "{}",
        format_forecast(snapshot.forecast, snapshot.forecast_critical, settings)
    );
    Ok(())
}

/// Check a prospective amount against a category's history without saving
pub fn handle_check<S: RecordStore>(
    store: &S,
    settings: &Settings,
    amount: &str,
    category: &str,
) -> MonospendResult<()> {
    let category = parse_category(category)?;
    let amount = Money::parse_or_zero(amount);
    let history = store.load_expenses()?;

    let result = check_anomaly(amount.as_f64(), &history, category);

    if result.is_anomaly {
        println!(
            "ANOMALY: {} is more than 3x your average {} spend ({})",
            settings.format_money(amount),
            category,
            format_amount(result.average, &settings.currency_symbol)
        );
    } else if filter_by_category(&history, category).len() < MIN_ANOMALY_SAMPLES {
        println!(
            "OK: not enough {} history to judge {}",
            category,
            settings.format_money(amount)
        );
    } else {
        println!(
            "OK: {} is within range of your average {} spend ({})",
            settings.format_money(amount),
            category,
            format_amount(result.average, &settings.currency_symbol)
        );
    }

    Ok(())
}
