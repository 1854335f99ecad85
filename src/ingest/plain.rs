//! Offline plain-text parser
//!
//! Understands short entries such as `"Taxi 45, Lunch 12.50 food"` or
//! `"wishlist Bike 500"`. Entries are separated by commas, semicolons or the
//! word "and". Within an entry the last amount-looking token is the amount, a
//! token naming a category sets the category, an ISO date sets the date and
//! the rest becomes the description.

use chrono::NaiveDate;

use super::candidate::{CandidateKind, CandidateParser, ParsedCandidate};
use crate::error::MonospendResult;
use crate::models::{Category, Money};

const WISHLIST_KEYWORDS: [&str; 2] = ["wishlist", "wish"];

/// Keyword parser that needs no network access
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_entry(entry: &str) -> Option<ParsedCandidate> {
        let tokens: Vec<&str> = entry.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        let amount_at = tokens.iter().rposition(|t| looks_like_amount(t))?;
        let amount = Money::parse(tokens[amount_at]).ok()?;
        if !amount.is_positive() {
            return None;
        }

        let lowered = entry.to_lowercase();
        let mut kind = CandidateKind::Expense;
        let mut skip_save_for = false;
        if lowered.starts_with("save for ") {
            kind = CandidateKind::Wishlist;
            skip_save_for = true;
        }

        let mut category = None;
        let mut date = None;
        let mut words = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if i == amount_at || (skip_save_for && i < 2) {
                continue;
            }
            if WISHLIST_KEYWORDS.iter().any(|k| token.eq_ignore_ascii_case(k)) {
                kind = CandidateKind::Wishlist;
                continue;
            }
            if date.is_none() {
                if let Ok(parsed) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
                    date = Some(parsed);
                    continue;
                }
            }
            if category.is_none() {
                if let Some(c) = Category::ALL
                    .iter()
                    .find(|c| c.name().eq_ignore_ascii_case(token))
                {
                    category = Some(c.name().to_string());
                    continue;
                }
            }
            words.push(*token);
        }

        let description = if words.is_empty() {
            category.clone().unwrap_or_else(|| "Unlabelled".to_string())
        } else {
            words.join(" ")
        };

        Some(ParsedCandidate {
            kind,
            amount,
            category,
            description,
            date,
        })
    }
}

impl CandidateParser for PlainTextParser {
    fn parse_text(&self, input: &str) -> MonospendResult<Vec<ParsedCandidate>> {
        let candidates: Vec<ParsedCandidate> = split_entries(input)
            .iter()
            .filter_map(|entry| Self::parse_entry(entry))
            .collect();

        tracing::debug!(count = candidates.len(), "parsed plain-text input");
        Ok(candidates)
    }
}

fn looks_like_amount(token: &str) -> bool {
    let digits = token.trim_start_matches('$');
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn split_entries(input: &str) -> Vec<String> {
    input
        .split([',', ';'])
        .flat_map(|part| {
            let mut entries = Vec::new();
            let mut current = Vec::new();
            for word in part.split_whitespace() {
                if word.eq_ignore_ascii_case("and") {
                    entries.push(current.join(" "));
                    current.clear();
                } else {
                    current.push(word);
                }
            }
            entries.push(current.join(" "));
            entries
        })
        .filter(|e| !e.trim().is_empty())
        .collect()
}
