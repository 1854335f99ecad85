//! Expense CLI commands

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{MonospendError, MonospendResult};
use crate::ingest::{resolve_candidates, IngestOptions, ParsedCandidate};
use crate::metrics::{daily_totals, filter_by_category, filter_in_range, stats_eligible, sum_in_range};
use crate::models::{Expense, Money};
use crate::storage::RecordStore;

use super::ingest::commit_outcomes;
use super::{locate, parse_category};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Log a single expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Keep this expense out of narrated insights
        #[arg(long)]
        private: bool,
        /// Log even if the amount looks anomalous
        #[arg(short, long)]
        yes: bool,
    },

    /// List expenses, newest first
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show per-day totals
    Daily {
        /// Start date (inclusive, defaults to the first of this month)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (inclusive, defaults to today)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show the recent expenses that insights may use
    Recent,

    /// Delete an expense by id (or unique id prefix)
    Delete {
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: RecordStore>(
    store: &mut S,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> MonospendResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
            private,
            yes,
        } => {
            let category = parse_category(&category)?;
            let mut candidate =
                ParsedCandidate::expense(Money::parse_or_zero(&amount), description)
                    .with_category(category.name());
            if let Some(date) = date {
                candidate = candidate.with_date(date);
            }

            let history = store.load_expenses()?;
            let options = IngestOptions::new(today)
                .exclude_from_stats(private)
                .hold_anomalies(settings.anomaly_hold);
            let outcomes = resolve_candidates(vec![candidate], &history, options);
            commit_outcomes(store, settings, outcomes, yes)?;
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let expenses = store.load_expenses()?;

            let mut selected: Vec<&Expense> = match category {
                Some(label) => filter_by_category(&expenses, parse_category(&label)?),
                None => expenses.iter().collect(),
            };
            if let Some(start) = from {
                selected.retain(|e| e.date >= start);
            }
            if let Some(end) = to {
                selected.retain(|e| e.date <= end);
            }

            selected.sort_by(|a, b| b.date.cmp(&a.date));
            if let Some(limit) = limit {
                selected.truncate(limit);
            }

            let owned: Vec<Expense> = selected.into_iter().cloned().collect();
            print!("{}", format_expense_list(&owned, settings));
        }

        ExpenseCommands::Daily { from, to } => {
            let expenses = store.load_expenses()?;
            let start = from.unwrap_or_else(|| today.with_day(1).unwrap_or(today));
            let end = to.unwrap_or(today);
            if start > end {
                return Err(MonospendError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }

            let in_range = filter_in_range(&expenses, start, end);
            let totals = daily_totals(in_range.iter().copied());

            if totals.is_empty() {
                println!("No expenses between {} and {}.", start, end);
                return Ok(());
            }
            for (day, total) in &totals {
                println!("{}  {:>12}", settings.format_date(*day), settings.format_money(*total));
            }
            println!(
                "Total         {:>12}",
                settings.format_money(sum_in_range(&expenses, start, end))
            );
        }

        ExpenseCommands::Recent => {
            let expenses = store.load_expenses()?;
            let eligible: Vec<Expense> = stats_eligible(&expenses, settings.insight_sample_size)
                .into_iter()
                .cloned()
                .collect();
            print!("{}", format_expense_list(&eligible, settings));
        }

        ExpenseCommands::Delete { id } => {
            let mut expenses = store.load_expenses()?;
            let index = locate(
                &expenses,
                &id,
                |e, r| e.id.matches(r),
                MonospendError::expense_not_found,
            )?;
            let removed = expenses.remove(index);
            store.save_expenses(&expenses)?;
            println!("Deleted expense: {}", removed);
        }
    }

    Ok(())
}
