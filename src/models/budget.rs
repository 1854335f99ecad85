//! Budget configuration
//!
//! Replaced wholesale whenever the user edits their settings. A category
//! with no entry in `category_limits` is unmonitored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::money::Money;

/// Income, overall spending limit and per-category limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfiguration {
    /// Monthly income
    #[serde(default)]
    pub income: Money,

    /// Overall monthly spending limit
    #[serde(default, alias = "total")]
    pub total_limit: Money,

    /// Per-category monthly limits
    #[serde(default, alias = "categories")]
    pub category_limits: BTreeMap<Category, Money>,
}

impl BudgetConfiguration {
    pub fn new(income: Money, total_limit: Money) -> Self {
        Self {
            income: income.non_negative(),
            total_limit: total_limit.non_negative(),
            category_limits: BTreeMap::new(),
        }
    }

    /// Builder-style category limit setter
    pub fn with_limit(mut self, category: Category, limit: Money) -> Self {
        self.set_limit(category, limit);
        self
    }

    /// Set or replace a category limit; a zero limit removes monitoring
    pub fn set_limit(&mut self, category: Category, limit: Money) {
        let limit = limit.non_negative();
        if limit.is_zero() {
            self.category_limits.remove(&category);
        } else {
            self.category_limits.insert(category, limit);
        }
    }

    /// The configured limit for a category, if it is monitored
    pub fn limit_for(&self, category: Category) -> Option<Money> {
        self.category_limits
            .get(&category)
            .copied()
            .filter(|limit| limit.is_positive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_is_unmonitored() {
        let mut config = BudgetConfiguration::new(Money::from_dollars(3000), Money::from_dollars(1500))
            .with_limit(Category::Food, Money::from_dollars(400));
        assert_eq!(config.limit_for(Category::Food), Some(Money::from_dollars(400)));

        config.set_limit(Category::Food, Money::zero());
        assert_eq!(config.limit_for(Category::Food), None);
        assert_eq!(config.limit_for(Category::Tech), None);
    }

    #[test]
    fn test_accepts_legacy_field_names() {
        let json = r#"{"income":3000,"total":1500,"categories":{"Food":400.5}}"#;
        let config: BudgetConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.income, Money::from_dollars(3000));
        assert_eq!(config.total_limit, Money::from_dollars(1500));
        assert_eq!(config.limit_for(Category::Food), Some(Money::from_cents(40050)));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let config: BudgetConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BudgetConfiguration::default());
    }
}
