//! Dashboard snapshot
//!
//! Runs every derived metric once over a set of records for a given day.
//! Cheap enough to rebuild after every mutation.

use chrono::{Datelike, NaiveDate};

use super::aggregate::{category_breakdown, CategoryShare};
use super::budget::BudgetMetrics;
use super::forecast::{visible_forecast, ForecastResult};
use super::limits::{category_limit_report, CategoryLimitRow, LimitStatus};
use super::wishlist::{wishlist_progress, WishlistProgress};
use crate::models::{Money, Records};

/// All derived values the dashboard displays
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot<'a> {
    pub today: NaiveDate,
    pub budget: BudgetMetrics,
    pub category_limits: Vec<CategoryLimitRow>,
    /// Shown forecast; `None` when data is insufficient or reserves are not positive
    pub forecast: Option<ForecastResult>,
    pub forecast_critical: bool,
    /// This month's spend per category
    pub breakdown: Vec<CategoryShare>,
    pub wishlist: Vec<WishlistProgress<'a>>,
    pub annual_subscription_cost: Money,
}

impl<'a> DashboardSnapshot<'a> {
    /// Compute the snapshot for `today`
    ///
    /// `critical_days` is the depletion horizon below which the forecast is
    /// flagged as critical.
    pub fn compute(records: &'a Records, today: NaiveDate, critical_days: i64) -> Self {
        let budget = BudgetMetrics::compute(
            &records.expenses,
            &records.subscriptions,
            &records.budgets,
            today,
        );
        let category_limits = category_limit_report(&records.expenses, &records.budgets, today);
        let forecast = visible_forecast(&records.expenses, budget.current_reserves, today);
        let forecast_critical = forecast.is_some_and(|f| f.is_critical(critical_days));

        let breakdown = category_breakdown(
            records
                .expenses
                .iter()
                .filter(|e| e.date.month() == today.month() && e.date.year() == today.year()),
        );

        let wishlist = wishlist_progress(&records.wishlist, budget.current_reserves);
        let annual_subscription_cost = records.subscriptions.iter().map(|s| s.annual_cost()).sum();

        tracing::debug!(
            %today,
            expenses = records.expenses.len(),
            month_spend = %budget.month_spend,
            reserves = budget.current_reserves,
            hull = %budget.hull.status,
            "computed dashboard snapshot"
        );

        Self {
            today,
            budget,
            category_limits,
            forecast,
            forecast_critical,
            breakdown,
            wishlist,
            annual_subscription_cost,
        }
    }

    /// Monitored categories currently over their limit
    pub fn clipping_categories(&self) -> Vec<&CategoryLimitRow> {
        self.category_limits
            .iter()
            .filter(|row| row.status == LimitStatus::Clipping)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::budget::HullStatus;
    use crate::models::{
        BudgetConfiguration, Category, Expense, Frequency, Subscription, WishlistItem,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Records {
        let mut expenses: Vec<Expense> = (1..=8)
            .map(|d| Expense::new(Money::from_dollars(25), Category::Food, date(2025, 9, d)))
            .collect();
        expenses.push(Expense::new(Money::from_dollars(300), Category::Tech, date(2025, 9, 9)));
        expenses.push(Expense::new(Money::from_dollars(60), Category::Food, date(2025, 8, 20)));

        Records {
            expenses,
            subscriptions: vec![Subscription::new(
                "Streaming",
                Money::from_dollars(15),
                Frequency::Monthly,
            )],
            budgets: BudgetConfiguration::new(Money::from_dollars(2000), Money::from_dollars(1000))
                .with_limit(Category::Food, Money::from_dollars(220))
                .with_limit(Category::Tech, Money::from_dollars(250)),
            wishlist: vec![WishlistItem::new("Camera", Money::from_dollars(600))],
        }
    }

    #[test]
    fn test_snapshot_combines_metrics() {
        let records = records();
        let today = date(2025, 9, 10);
        let snapshot = DashboardSnapshot::compute(&records, today, 30);

        assert_eq!(snapshot.budget.month_spend, Money::from_dollars(500));
        assert_eq!(snapshot.budget.current_reserves, 1485.0);
        assert_eq!(snapshot.budget.hull.status, HullStatus::Optimal);
        assert_eq!(snapshot.category_limits.len(), 2);
        assert_eq!(snapshot.clipping_categories().len(), 1);
        assert_eq!(snapshot.clipping_categories()[0].category, Category::Tech);
        assert_eq!(snapshot.breakdown[0].category, Category::Tech);
        assert_eq!(snapshot.annual_subscription_cost, Money::from_dollars(180));
        assert!(snapshot.wishlist[0].is_funded());

        let forecast = snapshot.forecast.unwrap();
        assert!(forecast.daily_burn > 0.0);
        assert!(!snapshot.forecast_critical);
    }

    #[test]
    fn test_forecast_hidden_when_reserves_negative() {
        let mut records = records();
        records.budgets.income = Money::zero();
        let snapshot = DashboardSnapshot::compute(&records, date(2025, 9, 10), 30);

        assert!(snapshot.budget.current_reserves < 0.0);
        assert_eq!(snapshot.forecast, None);
        assert!(!snapshot.forecast_critical);
        assert_eq!(snapshot.wishlist[0].funded, Money::zero());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let records = records();
        let today = date(2025, 9, 10);
        assert_eq!(
            DashboardSnapshot::compute(&records, today, 30),
            DashboardSnapshot::compute(&records, today, 30)
        );
    }
}
