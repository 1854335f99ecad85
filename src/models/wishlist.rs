//! Wishlist goals

use serde::{Deserialize, Serialize};

use super::ids::WishlistItemId;
use super::money::Money;

/// Something the user is saving toward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub name: String,
    pub cost: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WishlistItem {
    pub fn new(name: impl Into<String>, cost: Money) -> Self {
        Self {
            id: WishlistItemId::new(),
            name: name.into(),
            cost: cost.non_negative(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
