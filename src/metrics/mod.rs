//! Derived-metrics and anomaly engine
//!
//! Pure functions over expense, subscription and budget records. Nothing in
//! this module keeps state between calls or performs I/O, so every function
//! can be called from any thread as often as needed.
//!
//! - `aggregate`: month/range sums and filters
//! - `budget`: reserves, remaining, daily allowance, load, hull integrity
//! - `limits`: per-category limit status
//! - `anomaly`: abnormal-spend detection
//! - `forecast`: burn rate and reserve depletion
//! - `wishlist`: reserve distribution over goals
//! - `snapshot`: everything above for one day

pub mod aggregate;
pub mod anomaly;
pub mod budget;
pub mod forecast;
pub mod limits;
pub mod snapshot;
pub mod wishlist;

pub use aggregate::{
    category_breakdown, daily_totals, filter_by_category, filter_in_range, stats_eligible,
    sum_for_calendar_month, sum_for_month_of, sum_in_range, CategoryShare,
};
pub use anomaly::{check_anomaly, AnomalyResult, MIN_ANOMALY_SAMPLES};
pub use budget::{
    daily_allowance, monthly_subscription_cost, BudgetMetrics, HullIntegrity, HullStatus,
    HULL_FALLBACK_BASELINE,
};
pub use forecast::{forecast_depletion, visible_forecast, ForecastResult};
pub use limits::{category_limit_report, CategoryLimitRow, LimitStatus};
pub use snapshot::DashboardSnapshot;
pub use wishlist::{wishlist_progress, WishlistProgress};
