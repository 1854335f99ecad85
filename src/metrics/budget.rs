//! Budget metrics calculator
//!
//! Combines this month's spend with the income/limit configuration to
//! produce the headline dashboard numbers. All denominators are clamped to
//! at least one so no value here is ever NaN or infinite.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

use super::aggregate::sum_for_month_of;
use crate::models::{BudgetConfiguration, Expense, Money, Subscription};

/// Baseline used for hull integrity when no income is configured
pub const HULL_FALLBACK_BASELINE: Money = Money::from_dollars(1000);

/// Hull integrity below this percentage is critical
pub const HULL_CRITICAL_BELOW: f64 = 20.0;

/// Hull integrity below this percentage is compromised
pub const HULL_COMPROMISED_BELOW: f64 = 50.0;

/// Sum of the monthly-equivalent cost of every subscription
pub fn monthly_subscription_cost(subscriptions: &[Subscription]) -> f64 {
    subscriptions.iter().map(Subscription::monthly_equivalent).sum()
}

/// Income left after this month's spend and amortized subscriptions
///
/// May be negative.
pub fn current_reserves(income: Money, month_spend: Money, subscription_cost: f64) -> f64 {
    income.as_f64() - month_spend.as_f64() - subscription_cost
}

/// Spending limit left this month; negative when over budget
pub fn remaining(total_limit: Money, month_spend: Money) -> Money {
    total_limit - month_spend
}

/// Days left in the month after `today`, never less than one
pub fn days_remaining_in_month(today: NaiveDate) -> i64 {
    let last_day = last_day_of_month(today);
    (last_day.day() as i64 - today.day() as i64).max(1)
}

/// What can be spent per remaining day without exceeding the limit
///
/// Zero when no limit is configured, and never negative.
pub fn daily_allowance(total_limit: Money, remaining: Money, today: NaiveDate) -> f64 {
    if !total_limit.is_positive() {
        return 0.0;
    }
    let days = days_remaining_in_month(today) as f64;
    (remaining.as_f64() / days).max(0.0)
}

/// Month spend as a percentage of the limit; zero without a limit
pub fn system_load_percent(month_spend: Money, total_limit: Money) -> f64 {
    if total_limit.is_positive() {
        month_spend.as_f64() / total_limit.as_f64() * 100.0
    } else {
        0.0
    }
}

/// Health band for hull integrity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullStatus {
    Critical,
    Compromised,
    Optimal,
}

impl HullStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < HULL_CRITICAL_BELOW {
            Self::Critical
        } else if percentage < HULL_COMPROMISED_BELOW {
            Self::Compromised
        } else {
            Self::Optimal
        }
    }
}

impl fmt::Display for HullStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::Compromised => write!(f, "COMPROMISED"),
            Self::Optimal => write!(f, "OPTIMAL"),
        }
    }
}

/// Remaining headroom of income (or the fallback baseline)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullIntegrity {
    pub max_hull: Money,
    pub current_hull: Money,
    /// Always within 0.0..=100.0
    pub percentage: f64,
    pub status: HullStatus,
}

impl HullIntegrity {
    pub fn compute(income: Money, month_spend: Money) -> Self {
        let max_hull = if income.is_positive() {
            income
        } else {
            HULL_FALLBACK_BASELINE
        };
        let current_hull = (max_hull - month_spend).non_negative();
        let percentage = (current_hull.as_f64() / max_hull.as_f64() * 100.0).clamp(0.0, 100.0);

        Self {
            max_hull,
            current_hull,
            percentage,
            status: HullStatus::from_percentage(percentage),
        }
    }
}

/// Every headline metric for one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetMetrics {
    pub month_spend: Money,
    pub monthly_subscription_cost: f64,
    pub current_reserves: f64,
    pub remaining: Money,
    pub daily_allowance: f64,
    pub system_load_percent: f64,
    pub hull: HullIntegrity,
}

impl BudgetMetrics {
    /// Compute all budget metrics for the month containing `today`
    pub fn compute(
        expenses: &[Expense],
        subscriptions: &[Subscription],
        config: &BudgetConfiguration,
        today: NaiveDate,
    ) -> Self {
        let month_spend = sum_for_month_of(expenses, today);
        Self::from_month_spend(month_spend, subscriptions, config, today)
    }

    /// Compute from an already-aggregated month spend
    pub fn from_month_spend(
        month_spend: Money,
        subscriptions: &[Subscription],
        config: &BudgetConfiguration,
        today: NaiveDate,
    ) -> Self {
        let subscription_cost = monthly_subscription_cost(subscriptions);
        let remaining = remaining(config.total_limit, month_spend);

        Self {
            month_spend,
            monthly_subscription_cost: subscription_cost,
            current_reserves: current_reserves(config.income, month_spend, subscription_cost),
            remaining,
            daily_allowance: daily_allowance(config.total_limit, remaining, today),
            system_load_percent: system_load_percent(month_spend, config.total_limit),
            hull: HullIntegrity::compute(config.income, month_spend),
        }
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Frequency};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(income: i64, limit: i64) -> BudgetConfiguration {
        BudgetConfiguration::new(Money::from_dollars(income), Money::from_dollars(limit))
    }

    #[test]
    fn test_full_budget_used() {
        let metrics = BudgetMetrics::from_month_spend(
            Money::from_dollars(1500),
            &[],
            &config(3000, 1500),
            date(2025, 6, 10),
        );
        assert_eq!(metrics.system_load_percent, 100.0);
        assert_eq!(metrics.remaining, Money::zero());
        assert_eq!(metrics.daily_allowance, 0.0);
    }

    #[test]
    fn test_subscription_cost_amortizes_yearly() {
        let subs = vec![
            Subscription::new("Domain", Money::from_dollars(120), Frequency::Yearly),
            Subscription::new("Music", Money::from_dollars(10), Frequency::Monthly),
        ];
        assert_eq!(monthly_subscription_cost(&subs), 20.0);
        assert_eq!(monthly_subscription_cost(&[]), 0.0);
    }

    #[test]
    fn test_reserves_subtract_spend_and_subscriptions() {
        let subs = vec![Subscription::new("Gym", Money::from_dollars(40), Frequency::Monthly)];
        let expenses = vec![
            Expense::new(Money::from_dollars(100), Category::Food, date(2025, 6, 2)),
            Expense::new(Money::from_dollars(900), Category::Food, date(2025, 5, 30)),
        ];
        let metrics = BudgetMetrics::compute(&expenses, &subs, &config(500, 0), date(2025, 6, 20));
        assert_eq!(metrics.month_spend, Money::from_dollars(100));
        assert_eq!(metrics.current_reserves, 360.0);

        let broke = current_reserves(Money::zero(), Money::from_dollars(50), 0.0);
        assert_eq!(broke, -50.0);
    }

    #[test]
    fn test_days_remaining_clamps_on_last_day() {
        assert_eq!(days_remaining_in_month(date(2025, 1, 31)), 1);
        assert_eq!(days_remaining_in_month(date(2025, 1, 30)), 1);
        assert_eq!(days_remaining_in_month(date(2025, 1, 1)), 30);
        assert_eq!(days_remaining_in_month(date(2024, 2, 10)), 19);
        assert_eq!(days_remaining_in_month(date(2025, 12, 1)), 30);
    }

    #[test]
    fn test_daily_allowance_spreads_remaining() {
        // June has 30 days, so 29 remain after the 1st
        let allowance = daily_allowance(
            Money::from_dollars(1000),
            Money::from_dollars(580),
            date(2025, 6, 1),
        );
        assert!((allowance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_allowance_never_negative_and_zero_without_limit() {
        let today = date(2025, 6, 15);
        for limit in [0, 100, 1000] {
            for spend in [0, 50, 100, 999, 5000] {
                let limit = Money::from_dollars(limit);
                let rem = remaining(limit, Money::from_dollars(spend));
                let allowance = daily_allowance(limit, rem, today);
                assert!(allowance >= 0.0);
                if limit.is_zero() {
                    assert_eq!(allowance, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_system_load_without_limit_is_zero() {
        assert_eq!(system_load_percent(Money::from_dollars(300), Money::zero()), 0.0);
        assert_eq!(
            system_load_percent(Money::from_dollars(300), Money::from_dollars(600)),
            50.0
        );
    }

    #[test]
    fn test_hull_falls_back_to_baseline_without_income() {
        let hull = HullIntegrity::compute(Money::zero(), Money::from_dollars(200));
        assert_eq!(hull.max_hull, Money::from_dollars(1000));
        assert_eq!(hull.current_hull, Money::from_dollars(800));
        assert_eq!(hull.percentage, 80.0);
        assert_eq!(hull.status, HullStatus::Optimal);
    }

    #[test]
    fn test_hull_status_bands() {
        assert_eq!(HullStatus::from_percentage(19.99), HullStatus::Critical);
        assert_eq!(HullStatus::from_percentage(20.0), HullStatus::Compromised);
        assert_eq!(HullStatus::from_percentage(49.99), HullStatus::Compromised);
        assert_eq!(HullStatus::from_percentage(50.0), HullStatus::Optimal);
        assert_eq!(HullStatus::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_hull_percentage_stays_in_bounds() {
        for income in [0, 1, 500, 3000] {
            for spend in [0, 1, 499, 500, 1000, 10_000] {
                let hull = HullIntegrity::compute(Money::from_dollars(income), Money::from_dollars(spend));
                assert!((0.0..=100.0).contains(&hull.percentage));
            }
        }
        let overspent = HullIntegrity::compute(Money::from_dollars(100), Money::from_dollars(400));
        assert_eq!(overspent.current_hull, Money::zero());
        assert_eq!(overspent.status, HullStatus::Critical);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let expenses = vec![Expense::new(Money::from_dollars(42), Category::Tech, date(2025, 6, 3))];
        let subs = vec![Subscription::new("Cloud", Money::from_dollars(60), Frequency::Yearly)];
        let cfg = config(2000, 800);
        let today = date(2025, 6, 18);
        assert_eq!(
            BudgetMetrics::compute(&expenses, &subs, &cfg, today),
            BudgetMetrics::compute(&expenses, &subs, &cfg, today)
        );
    }
}
