//! Budget CLI commands
//!
//! Income, the monthly total limit and per-category limits.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget;
use crate::error::{MonospendError, MonospendResult};
use crate::models::Money;
use crate::storage::RecordStore;

use super::parse_category;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set monthly income and/or the total spending limit
    Set {
        /// Monthly income
        #[arg(short, long)]
        income: Option<String>,
        /// Total monthly spending limit
        #[arg(short, long)]
        total: Option<String>,
    },

    /// Show the budget configuration
    Show,

    /// Set a category limit (0 removes it)
    Limit {
        /// Category name
        category: String,
        /// Monthly limit for the category
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: RecordStore>(
    store: &mut S,
    settings: &Settings,
    cmd: BudgetCommands,
) -> MonospendResult<()> {
    match cmd {
        BudgetCommands::Set { income, total } => {
            if income.is_none() && total.is_none() {
                return Err(MonospendError::Validation(
                    "Nothing to set: pass --income and/or --total".into(),
                ));
            }

            let mut budgets = store.load_budgets()?;
            if let Some(income) = income {
                budgets.income = Money::parse_or_zero(&income);
            }
            if let Some(total) = total {
                budgets.total_limit = Money::parse_or_zero(&total);
            }
            store.save_budgets(&budgets)?;

            println!(
                "Budget updated: income {}, total limit {}",
                settings.format_money(budgets.income),
                settings.format_money(budgets.total_limit)
            );
        }

        BudgetCommands::Show => {
            let budgets = store.load_budgets()?;
            print!("{}", format_budget(&budgets, settings));
        }

        BudgetCommands::Limit { category, amount } => {
            let category = parse_category(&category)?;
            let limit = Money::parse_or_zero(&amount);

            let mut budgets = store.load_budgets()?;
            budgets.set_limit(category, limit);
            store.save_budgets(&budgets)?;

            if limit.is_zero() {
                println!("Removed limit for {}", category);
            } else {
                println!("Limit for {} set to {}", category, settings.format_money(limit));
            }
        }
    }

    Ok(())
}
