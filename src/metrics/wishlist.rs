//! Wishlist funding
//!
//! Reserves are poured into wishlist goals in list order: each goal takes
//! what it needs from what is left before the next one sees anything.

use crate::models::{Money, WishlistItem};

/// How far one goal is funded
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistProgress<'a> {
    pub item: &'a WishlistItem,
    pub funded: Money,
    /// 0.0..=100.0
    pub percent: f64,
}

impl WishlistProgress<'_> {
    pub fn is_funded(&self) -> bool {
        self.percent >= 100.0
    }
}

/// Distribute `reserves` across `items` in order
///
/// Negative reserves fund nothing. Zero-cost items count as fully funded.
pub fn wishlist_progress(items: &[WishlistItem], reserves: f64) -> Vec<WishlistProgress<'_>> {
    // Work in whole cents so the running balance cannot drift
    let mut available = Money::from_cents((reserves.max(0.0) * 100.0).floor() as i64);

    items
        .iter()
        .map(|item| {
            let funded = if available < item.cost {
                available
            } else {
                item.cost
            };
            available -= funded;

            let percent = if item.cost.is_positive() {
                (funded.as_f64() / item.cost.as_f64() * 100.0).min(100.0)
            } else {
                100.0
            };

            WishlistProgress {
                item,
                funded,
                percent,
            }
        })
        .collect()
}
