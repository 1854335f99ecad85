//! Record identifiers
//!
//! Ids are opaque strings: the store may hold ids produced by other tools
//! (imported backups, older exports), so nothing assumes a UUID shape. Fresh
//! ids are generated from a v4 UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(format!("{}{}", $prefix, Uuid::new_v4()))
            }

            /// Wrap an existing identifier as-is
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check whether a user-supplied reference names this id
            ///
            /// Accepts the full id or any prefix of at least 6 characters,
            /// with or without the type prefix.
            pub fn matches(&self, reference: &str) -> bool {
                let reference = reference.trim();
                if reference == self.0 {
                    return true;
                }
                let bare = self.0.strip_prefix($prefix).unwrap_or(&self.0);
                let reference = reference.strip_prefix($prefix).unwrap_or(reference);
                reference.len() >= 6 && bare.starts_with(reference)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(SubscriptionId, "sub-");
define_id!(WishlistItemId, "wish-");
