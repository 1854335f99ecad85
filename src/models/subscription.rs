//! Subscription model
//!
//! Subscriptions only contribute their amortized cost to the budget metrics;
//! nothing here schedules or posts charges.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SubscriptionId;
use super::money::Money;

/// Billing frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A recurring charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub cost: Money,
    #[serde(default)]
    pub frequency: Frequency,
    /// Day of month the charge lands on, kept as entered
    #[serde(default)]
    pub billing_date: String,
}

impl Subscription {
    pub fn new(name: impl Into<String>, cost: Money, frequency: Frequency) -> Self {
        Self {
            id: SubscriptionId::new(),
            name: name.into(),
            cost: cost.non_negative(),
            frequency,
            billing_date: String::new(),
        }
    }

    /// Cost normalized to one month (yearly plans are divided by 12)
    pub fn monthly_equivalent(&self) -> f64 {
        match self.frequency {
            Frequency::Monthly => self.cost.as_f64(),
            Frequency::Yearly => self.cost.as_f64() / 12.0,
        }
    }

    /// Cost normalized to one year
    pub fn annual_cost(&self) -> Money {
        match self.frequency {
            Frequency::Monthly => Money::from_cents(self.cost.cents() * 12),
            Frequency::Yearly => self.cost,
        }
    }
}
