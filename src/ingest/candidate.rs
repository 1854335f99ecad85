//! Parsed candidates and the parser collaborator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MonospendError, MonospendResult};
use crate::models::Money;

/// What a candidate turns into once accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Expense,
    Wishlist,
}

/// A record proposed by a parser, before category and date are resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCandidate {
    #[serde(rename = "type")]
    pub kind: CandidateKind,
    pub amount: Money,
    /// Free-text category label, resolved to a `Category` on ingest
    #[serde(default)]
    pub category: Option<String>,
    pub description: String,
    /// Defaults to the ingest day when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ParsedCandidate {
    pub fn expense(amount: Money, description: impl Into<String>) -> Self {
        Self {
            kind: CandidateKind::Expense,
            amount,
            category: None,
            description: description.into(),
            date: None,
        }
    }

    pub fn wishlist(amount: Money, description: impl Into<String>) -> Self {
        Self {
            kind: CandidateKind::Wishlist,
            amount,
            category: None,
            description: description.into(),
            date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Turns free text or a receipt image into candidate records
///
/// Implementations may call out to a remote service; callers own retries and
/// cancellation. An empty result means nothing was recognised.
pub trait CandidateParser {
    fn parse_text(&self, input: &str) -> MonospendResult<Vec<ParsedCandidate>>;

    /// Parse a receipt image. Receipts only ever yield expenses.
    fn parse_receipt(&self, _image: &[u8], _mime_type: &str) -> MonospendResult<Vec<ParsedCandidate>> {
        Err(MonospendError::Ingest(
            "receipt parsing is not supported by this parser".into(),
        ))
    }
}
