//! List views for stored records

use super::report::{format_amount, separator, truncate};
use crate::config::Settings;
use crate::models::{BudgetConfiguration, Category, Expense, Subscription, WishlistItem};

/// Expense log, in the order given
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<12} {:<14} {:<28} {:>12}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&separator(84));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<14} {:<12} {:<14} {:<28} {:>12}{}\n",
            truncate(expense.id.as_str(), 14),
            settings.format_date(expense.date),
            expense.category.name(),
            truncate(&expense.description, 28),
            settings.format_money(expense.amount),
            if expense.exclude_from_stats { " (private)" } else { "" }
        ));
    }

    let total = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&separator(84));
    output.push_str(&format!(
        "\n{:<70} {:>12}\n",
        format!("{} expense(s)", expenses.len()),
        settings.format_money(total)
    ));

    output
}

pub fn format_subscription_list(subscriptions: &[Subscription], settings: &Settings) -> String {
    if subscriptions.is_empty() {
        return "No subscriptions.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<24} {:>12} {:<8} {:>12}\n",
        "ID", "Name", "Cost", "Every", "Per month"
    ));
    output.push_str(&separator(74));
    output.push('\n');

    for sub in subscriptions {
        output.push_str(&format!(
            "{:<14} {:<24} {:>12} {:<8} {:>12}\n",
            truncate(sub.id.as_str(), 14),
            truncate(&sub.name, 24),
            settings.format_money(sub.cost),
            sub.frequency,
            format_amount(sub.monthly_equivalent(), &settings.currency_symbol)
        ));
    }

    output
}

pub fn format_wishlist(items: &[WishlistItem], settings: &Settings) -> String {
    if items.is_empty() {
        return "Wishlist is empty.\n".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!(
            "{:<14} {:<28} {:>12}",
            truncate(item.id.as_str(), 14),
            truncate(&item.name, 28),
            settings.format_money(item.cost)
        ));
        if let Some(url) = &item.url {
            output.push_str(&format!("  {}", url));
        }
        output.push('\n');
    }

    output
}

/// Income, total limit and every category limit
pub fn format_budget(config: &BudgetConfiguration, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:       {}\n", settings.format_money(config.income)));
    output.push_str(&format!(
        "Total limit:  {}\n",
        settings.format_money(config.total_limit)
    ));
    output.push_str(&separator(30));
    output.push('\n');

    for category in Category::ALL {
        let limit = config
            .limit_for(category)
            .map(|l| settings.format_money(l))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("{:<16} {:>12}\n", category.name(), limit));
    }

    output
}
