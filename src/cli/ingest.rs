//! Free-text logging and the shared commit path for new expenses

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::MonospendResult;
use crate::ingest::{ingest_text, IngestOptions, IngestOutcome, PlainTextParser};
use crate::storage::RecordStore;

/// What one batch of outcomes changed
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub expenses: usize,
    pub wishlist: usize,
    pub rejected: usize,
}

/// Persist outcomes, confirming or rejecting held expenses
///
/// Held expenses are confirmed when `confirm_anomalies` is set and rejected
/// otherwise. There is no interactive prompt.
pub fn commit_outcomes<S: RecordStore>(
    store: &mut S,
    settings: &Settings,
    outcomes: Vec<IngestOutcome>,
    confirm_anomalies: bool,
) -> MonospendResult<CommitSummary> {
    let mut expenses = store.load_expenses()?;
    let mut wishlist = store.load_wishlist()?;
    let mut summary = CommitSummary::default();

    for outcome in outcomes {
        match outcome {
            IngestOutcome::Committed(expense) => {
                println!("Logged: {}", expense);
                expenses.push(expense);
                summary.expenses += 1;
            }
            IngestOutcome::HeldForReview(pending) => {
                println!("ALERT: {}", pending.warning());
                if confirm_anomalies {
                    let expense = pending.confirm();
                    println!("Override authorized: {}", expense);
                    expenses.push(expense);
                    summary.expenses += 1;
                } else {
                    println!(
                        "Not logged: {} (re-run with --yes to log it anyway)",
                        pending.expense().description
                    );
                    pending.reject();
                    summary.rejected += 1;
                }
            }
            IngestOutcome::Wishlist(item) => {
                println!(
                    "Wishlist: {} ({})",
                    item.name,
                    settings.format_money(item.cost)
                );
                wishlist.push(item);
                summary.wishlist += 1;
            }
        }
    }

    if summary.expenses > 0 {
        store.save_expenses(&expenses)?;
    }
    if summary.wishlist > 0 {
        store.save_wishlist(&wishlist)?;
    }

    tracing::info!(
        expenses = summary.expenses,
        wishlist = summary.wishlist,
        rejected = summary.rejected,
        "committed ingest batch"
    );
    Ok(summary)
}

/// Log expenses and wishlist goals from free text
pub fn handle_log<S: RecordStore>(
    store: &mut S,
    settings: &Settings,
    today: NaiveDate,
    text: &str,
    private: bool,
    confirm_anomalies: bool,
) -> MonospendResult<CommitSummary> {
    let history = store.load_expenses()?;
    let options = IngestOptions::new(today)
        .exclude_from_stats(private)
        .hold_anomalies(settings.anomaly_hold);

    let outcomes = ingest_text(&PlainTextParser::new(), text, &history, options)?;
    let summary = commit_outcomes(store, settings, outcomes, confirm_anomalies)?;

    println!(
        ">> {} item(s) logged",
        summary.expenses + summary.wishlist
    );
    Ok(summary)
}
