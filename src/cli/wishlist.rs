//! Wishlist CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_wishlist;
use crate::display::report::format_bar;
use crate::error::{MonospendError, MonospendResult};
use crate::metrics::{wishlist_progress, BudgetMetrics};
use crate::models::{Money, WishlistItem};
use crate::storage::RecordStore;

use super::locate;

/// Wishlist subcommands
#[derive(Subcommand, Debug)]
pub enum WishlistCommands {
    /// Add a savings goal
    Add {
        name: String,
        cost: String,
        /// Link to the item
        #[arg(short, long)]
        url: Option<String>,
    },

    /// List goals
    List,

    /// Show how far current reserves fund each goal
    Progress,

    /// Delete a goal by id (or unique id prefix)
    Delete {
        id: String,
    },
}

/// Handle a wishlist command
pub fn handle_wishlist_command<S: RecordStore>(
    store: &mut S,
    settings: &Settings,
    today: NaiveDate,
    cmd: WishlistCommands,
) -> MonospendResult<()> {
    match cmd {
        WishlistCommands::Add { name, cost, url } => {
            if name.trim().is_empty() {
                return Err(MonospendError::Validation(
                    "Wishlist item name cannot be empty".into(),
                ));
            }

            let mut item = WishlistItem::new(name.trim(), Money::parse_or_zero(&cost));
            if let Some(url) = url {
                item = item.with_url(url);
            }

            let mut items = store.load_wishlist()?;
            println!(
                "Added to wishlist: {} {} ({})",
                item.name,
                settings.format_money(item.cost),
                item.id
            );
            items.push(item);
            store.save_wishlist(&items)?;
        }

        WishlistCommands::List => {
            let items = store.load_wishlist()?;
            print!("{}", format_wishlist(&items, settings));
        }

        WishlistCommands::Progress => {
            let records = store.load_all()?;
            let budget = BudgetMetrics::compute(
                &records.expenses,
                &records.subscriptions,
                &records.budgets,
                today,
            );

            let progress = wishlist_progress(&records.wishlist, budget.current_reserves);
            if progress.is_empty() {
                println!("Wishlist is empty.");
            }
            for p in &progress {
                println!(
                    "{:<28} {} {:>5.1}%  {} of {}",
                    p.item.name,
                    format_bar(p.percent, 100.0, 20),
                    p.percent,
                    settings.format_money(p.funded),
                    settings.format_money(p.item.cost)
                );
            }
        }

        WishlistCommands::Delete { id } => {
            let mut items = store.load_wishlist()?;
            let index = locate(
                &items,
                &id,
                |item, r| item.id.matches(r),
                MonospendError::wishlist_item_not_found,
            )?;
            let removed = items.remove(index);
            store.save_wishlist(&items)?;
            println!("Removed from wishlist: {}", removed.name);
        }
    }

    Ok(())
}
