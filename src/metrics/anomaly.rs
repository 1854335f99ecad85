//! Anomaly detector
//!
//! Flags a new expense that is far above the user's usual spend in the same
//! category. A flag needs both a relative and an absolute excess, so neither
//! a tiny history average nor an expensive-but-normal category triggers it
//! alone.

use crate::models::{Category, Expense};

/// Minimum number of prior expenses in a category before it can be judged
///
/// Applied uniformly: the detector and the ingest hold both gate on
/// `count >= MIN_ANOMALY_SAMPLES`.
pub const MIN_ANOMALY_SAMPLES: usize = 5;

/// How many times the category average an amount must exceed
pub const ANOMALY_MULTIPLIER: f64 = 3.0;

/// Amounts at or below this are never anomalous
pub const ANOMALY_ABSOLUTE_FLOOR: f64 = 50.0;

/// Outcome of an anomaly check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyResult {
    pub is_anomaly: bool,
    /// Category average; 0 when history is insufficient
    pub average: f64,
}

impl AnomalyResult {
    /// Result for a category without enough history
    pub const fn insufficient_history() -> Self {
        Self {
            is_anomaly: false,
            average: 0.0,
        }
    }
}

/// Check `amount` against the history of `category`
pub fn check_anomaly(amount: f64, history: &[Expense], category: Category) -> AnomalyResult {
    let (count, total) = history
        .iter()
        .filter(|e| e.category == category)
        .fold((0usize, 0i64), |(count, total), e| {
            (count + 1, total + e.amount.cents())
        });

    if count < MIN_ANOMALY_SAMPLES {
        return AnomalyResult::insufficient_history();
    }

    let average = total as f64 / 100.0 / count as f64;
    let is_anomaly = amount > average * ANOMALY_MULTIPLIER && amount > ANOMALY_ABSOLUTE_FLOOR;

    AnomalyResult {
        is_anomaly,
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn history(count: usize, dollars: i64, category: Category) -> Vec<Expense> {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        (0..count)
            .map(|_| Expense::new(Money::from_dollars(dollars), category, today))
            .collect()
    }

    #[test]
    fn test_insufficient_history() {
        let history = history(4, 10, Category::Food);
        assert_eq!(
            check_anomaly(1000.0, &history, Category::Food),
            AnomalyResult {
                is_anomaly: false,
                average: 0.0
            }
        );
    }

    #[test]
    fn test_exactly_min_samples_is_enough() {
        // Five records pass the gate; the sample threshold is count >= 5
        let history = history(5, 10, Category::Food);
        assert_eq!(check_anomaly(60.0, &history, Category::Food).average, 10.0);
    }

    #[test]
    fn test_flags_large_amount() {
        let history = history(5, 10, Category::Food);
        assert_eq!(
            check_anomaly(60.0, &history, Category::Food),
            AnomalyResult {
                is_anomaly: true,
                average: 10.0
            }
        );
    }

    #[test]
    fn test_normal_amount() {
        let history = history(5, 10, Category::Food);
        assert_eq!(
            check_anomaly(25.0, &history, Category::Food),
            AnomalyResult {
                is_anomaly: false,
                average: 10.0
            }
        );
        assert!(!check_anomaly(20.0, &history, Category::Food).is_anomaly);
    }

    #[test]
    fn test_multiplier_without_absolute_floor() {
        // 40 > 3 * 10 but not > 50
        let history = history(5, 10, Category::Food);
        assert!(!check_anomaly(40.0, &history, Category::Food).is_anomaly);
    }

    #[test]
    fn test_absolute_floor_without_multiplier() {
        // 60 > 50 but not > 3 * 25
        let history = history(5, 25, Category::Food);
        let result = check_anomaly(60.0, &history, Category::Food);
        assert!(!result.is_anomaly);
        assert_eq!(result.average, 25.0);
    }

    #[test]
    fn test_other_categories_are_ignored() {
        let mut log = history(4, 10, Category::Food);
        log.extend(history(10, 1, Category::Tech));
        assert_eq!(
            check_anomaly(500.0, &log, Category::Food),
            AnomalyResult::insufficient_history()
        );
        assert!(check_anomaly(500.0, &log, Category::Tech).is_anomaly);
    }

    #[test]
    fn test_idempotent() {
        let history = history(6, 12, Category::Transport);
        assert_eq!(
            check_anomaly(80.0, &history, Category::Transport),
            check_anomaly(80.0, &history, Category::Transport)
        );
    }
}
