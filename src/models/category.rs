//! Spending categories
//!
//! Categories form a closed set. Free-text labels coming from the user or
//! from the candidate parser are resolved once, at the data-entry boundary,
//! with anything unrecognised falling back to [`Category::Other`]. The
//! metrics engine only ever compares resolved values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Shopping,
    Entertainment,
    Health,
    Tech,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Entertainment,
        Category::Health,
        Category::Tech,
        Category::Other,
    ];

    /// The canonical label used in storage and exports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Tech => "Tech",
            Self::Other => "Other",
        }
    }

    /// Resolve a free-text label, case-insensitively
    ///
    /// Unknown or empty labels resolve to `Other`.
    pub fn resolve(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(label))
            .unwrap_or(Self::Other)
    }

    /// Resolve an optional label, as produced by the candidate parser
    pub fn resolve_opt(label: Option<&str>) -> Self {
        label.map(Self::resolve).unwrap_or(Self::Other)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::resolve(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_resolve_known_labels() {
        assert_eq!(Category::resolve("Food"), Category::Food);
        assert_eq!(Category::resolve("  tech "), Category::Tech);
        assert_eq!(Category::resolve("ENTERTAINMENT"), Category::Entertainment);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_other() {
        assert_eq!(Category::resolve("Groceries"), Category::Other);
        assert_eq!(Category::resolve(""), Category::Other);
        assert_eq!(Category::resolve_opt(None), Category::Other);
        assert_eq!(Category::resolve_opt(Some("health")), Category::Health);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Transport\"");

        let parsed: Category = serde_json::from_str("\"Pets\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn test_map_keys_round_trip() {
        let mut limits = BTreeMap::new();
        limits.insert(Category::Food, 200);
        limits.insert(Category::Tech, 50);

        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"Food":200,"Tech":50}"#);

        let back: BTreeMap<Category, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limits);
    }
}
