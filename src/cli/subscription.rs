//! Subscription CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::format_subscription_list;
use crate::error::{MonospendError, MonospendResult};
use crate::metrics::monthly_subscription_cost;
use crate::models::{Frequency, Money, Subscription};
use crate::storage::RecordStore;

use super::locate;

/// Billing frequency as given on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    Monthly,
    Yearly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Monthly => Frequency::Monthly,
            FrequencyArg::Yearly => Frequency::Yearly,
        }
    }
}

/// Subscription subcommands
#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// Add a recurring charge
    Add {
        /// Name of the service
        name: String,
        /// Cost per billing period
        cost: String,
        /// Billing frequency
        #[arg(short, long, value_enum, default_value = "monthly")]
        frequency: FrequencyArg,
        /// Day of month the charge lands on
        #[arg(short, long)]
        billing_day: Option<u32>,
    },

    /// List subscriptions with their monthly and annual cost
    List,

    /// Delete a subscription by id (or unique id prefix)
    Delete {
        id: String,
    },
}

/// Handle a subscription command
pub fn handle_subscription_command<S: RecordStore>(
    store: &mut S,
    settings: &Settings,
    cmd: SubscriptionCommands,
) -> MonospendResult<()> {
    match cmd {
        SubscriptionCommands::Add {
            name,
            cost,
            frequency,
            billing_day,
        } => {
            if name.trim().is_empty() {
                return Err(MonospendError::Validation(
                    "Subscription name cannot be empty".into(),
                ));
            }

            let mut subscription =
                Subscription::new(name.trim(), Money::parse_or_zero(&cost), frequency.into());
            if let Some(day) = billing_day {
                if !(1..=31).contains(&day) {
                    return Err(MonospendError::Validation(format!(
                        "Billing day must be between 1 and 31, got {}",
                        day
                    )));
                }
                subscription.billing_date = day.to_string();
            }

            let mut subscriptions = store.load_subscriptions()?;
            println!(
                "Added subscription: {} {} {} ({})",
                subscription.name,
                settings.format_money(subscription.cost),
                subscription.frequency,
                subscription.id
            );
            subscriptions.push(subscription);
            store.save_subscriptions(&subscriptions)?;
        }

        SubscriptionCommands::List => {
            let subscriptions = store.load_subscriptions()?;
            print!("{}", format_subscription_list(&subscriptions, settings));

            if !subscriptions.is_empty() {
                let annual: Money = subscriptions.iter().map(|s| s.annual_cost()).sum();
                println!(
                    "\nMonthly equivalent: {}{:.2}   Annual: {}",
                    settings.currency_symbol,
                    monthly_subscription_cost(&subscriptions),
                    settings.format_money(annual)
                );
            }
        }

        SubscriptionCommands::Delete { id } => {
            let mut subscriptions = store.load_subscriptions()?;
            let index = locate(
                &subscriptions,
                &id,
                |s, r| s.id.matches(r),
                MonospendError::subscription_not_found,
            )?;
            let removed = subscriptions.remove(index);
            store.save_subscriptions(&subscriptions)?;
            println!("Deleted subscription: {}", removed.name);
        }
    }

    Ok(())
}
