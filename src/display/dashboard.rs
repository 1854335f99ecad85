//! Dashboard views: status, limits and forecast

use super::report::{double_separator, format_amount, format_bar, format_percentage, separator};
use crate::config::Settings;
use crate::metrics::{CategoryLimitRow, DashboardSnapshot, ForecastResult, LimitStatus};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Full status screen
pub fn format_status(snapshot: &DashboardSnapshot<'_>, settings: &Settings) -> String {
    let sym = settings.currency_symbol.as_str();
    let budget = &snapshot.budget;
    let mut output = String::new();

    output.push_str(&format!(
        "MONOSPEND STATUS - {}\n",
        settings.format_date(snapshot.today)
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Month spend:",
        settings.format_money(budget.month_spend)
    ));
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Subscriptions / month:",
        format_amount(budget.monthly_subscription_cost, sym)
    ));
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Reserves:",
        format_amount(budget.current_reserves, sym)
    ));
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Remaining:",
        settings.format_money(budget.remaining)
    ));
    output.push_str(&format!(
        "{:<24} {:>14}\n",
        "Daily allowance:",
        format_amount(budget.daily_allowance, sym)
    ));
    output.push_str(&format!(
        "{:<24} {:>14}  {}\n",
        "System load:",
        format_percentage(budget.system_load_percent),
        format_bar(budget.system_load_percent, 100.0, BAR_WIDTH)
    ));
    output.push_str(&format!(
        "{:<24} {:>14}  {} [{}]\n",
        "Hull integrity:",
        format_percentage(budget.hull.percentage),
        format_bar(budget.hull.percentage, 100.0, BAR_WIDTH),
        budget.hull.status
    ));

    if !snapshot.category_limits.is_empty() {
        output.push('\n');
        output.push_str(&format_limits(&snapshot.category_limits, settings));
    }

    output.push('\n');
    output.push_str(&format_forecast(snapshot.forecast, snapshot.forecast_critical, settings));

    if !snapshot.breakdown.is_empty() {
        output.push_str("\nThis month by category\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for share in &snapshot.breakdown {
            output.push_str(&format!(
                "  {:<16} {:>12} {:>6}  {}\n",
                share.category.name(),
                settings.format_money(share.total),
                format_percentage(share.share * 100.0),
                format_bar(share.share, 1.0, BAR_WIDTH)
            ));
        }
    }

    if !snapshot.wishlist.is_empty() {
        output.push_str("\nWishlist\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for progress in &snapshot.wishlist {
            output.push_str(&format!(
                "  {:<20} {:>12} / {:<12} {}{}\n",
                progress.item.name,
                settings.format_money(progress.funded),
                settings.format_money(progress.item.cost),
                format_bar(progress.percent, 100.0, 10),
                if progress.is_funded() { " READY" } else { "" }
            ));
        }
    }

    output.push_str(&format!(
        "\nAnnual subscription cost: {}\n",
        settings.format_money(snapshot.annual_subscription_cost)
    ));

    output
}

/// Category limit table
pub fn format_limits(rows: &[CategoryLimitRow], settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {:>12} {:>12}  {:<BAR_WIDTH$}  {}\n",
        "Category", "Spent", "Limit", "", "Status"
    ));
    output.push_str(&separator(WIDTH + 14));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No category limits set.\n");
        return output;
    }

    for row in rows {
        let marker = match row.status {
            LimitStatus::Clipping => " !",
            LimitStatus::Warning => " *",
            LimitStatus::Nominal => "",
        };
        output.push_str(&format!(
            "{:<16} {:>12} {:>12}  {}  {}{}\n",
            row.category.name(),
            settings.format_money(row.spent),
            settings.format_money(row.limit),
            format_bar(row.percent, 100.0, BAR_WIDTH),
            row.status,
            marker
        ));
    }

    output
}

/// Burn-rate forecast line
pub fn format_forecast(
    forecast: Option<ForecastResult>,
    critical: bool,
    settings: &Settings,
) -> String {
    match forecast {
        None => "Forecast: not available\n".to_string(),
        Some(f) => format!(
            "Forecast: {} / day burn, reserves last {} days{}\n",
            format_amount(f.daily_burn, &settings.currency_symbol),
            f.days_until_depletion,
            if critical { " [CRITICAL]" } else { "" }
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetConfiguration, Category, Expense, Money, Records, WishlistItem};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    fn records() -> Records {
        Records {
            expenses: (1..=6)
                .map(|d| Expense::new(Money::from_dollars(40), Category::Food, date(d)))
                .collect(),
            budgets: BudgetConfiguration::new(Money::from_dollars(1000), Money::from_dollars(600))
                .with_limit(Category::Food, Money::from_dollars(200)),
            wishlist: vec![WishlistItem::new("Bike", Money::from_dollars(300))],
            ..Records::default()
        }
    }

    #[test]
    fn test_status_output() {
        let records = records();
        let snapshot = DashboardSnapshot::compute(&records, date(10), 30);
        let output = format_status(&snapshot, &Settings::default());

        assert!(output.contains("MONOSPEND STATUS - 2025-09-10"));
        assert!(output.contains("$240.00"));
        assert!(output.contains("CLIPPING"));
        assert!(output.contains("OPTIMAL"));
        assert!(output.contains("Bike"));
        assert!(output.contains("READY"));
    }

    #[test]
    fn test_limits_empty() {
        let output = format_limits(&[], &Settings::default());
        assert!(output.contains("No category limits set."));
    }

    #[test]
    fn test_forecast_lines() {
        let settings = Settings::default();
        assert_eq!(
            format_forecast(None, false, &settings),
            "Forecast: not available\n"
        );

        let forecast = ForecastResult {
            daily_burn: 25.0,
            days_until_depletion: 12,
        };
        let line = format_forecast(Some(forecast), true, &settings);
        assert!(line.contains("$25.00 / day"));
        assert!(line.contains("12 days"));
        assert!(line.contains("[CRITICAL]"));
    }
}
