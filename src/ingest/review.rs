//! Candidate resolution and the anomaly hold
//!
//! Expense candidates are checked against the existing history before they
//! are committed. An anomalous one is returned as a [`PendingReview`] that the
//! caller either confirms (the expense is committed unchanged) or rejects
//! (the expense is discarded). Nothing here touches a store.

use chrono::NaiveDate;

use super::candidate::{CandidateKind, CandidateParser, ParsedCandidate};
use crate::error::{MonospendError, MonospendResult};
use crate::metrics::anomaly::{check_anomaly, AnomalyResult};
use crate::models::{Category, Expense, WishlistItem};

/// Options applied to every candidate of one ingest
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Date used for candidates without one
    pub today: NaiveDate,
    /// Mark committed expenses as hidden from narrated insights
    pub exclude_from_stats: bool,
    /// Hold anomalous expenses instead of committing them
    pub hold_anomalies: bool,
}

impl IngestOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            exclude_from_stats: false,
            hold_anomalies: true,
        }
    }

    pub fn exclude_from_stats(mut self, exclude: bool) -> Self {
        self.exclude_from_stats = exclude;
        self
    }

    pub fn hold_anomalies(mut self, hold: bool) -> Self {
        self.hold_anomalies = hold;
        self
    }
}

/// An anomalous expense awaiting confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReview {
    expense: Expense,
    anomaly: AnomalyResult,
}

impl PendingReview {
    pub fn expense(&self) -> &Expense {
        &self.expense
    }

    pub fn anomaly(&self) -> AnomalyResult {
        self.anomaly
    }

    /// Human-readable alert for the held expense
    pub fn warning(&self) -> String {
        format!(
            "{} is significantly higher than your average {} spend (${:.0})",
            self.expense.amount, self.expense.category, self.anomaly.average
        )
    }

    /// Accept the expense as-is
    pub fn confirm(self) -> Expense {
        tracing::info!(id = %self.expense.id, "anomalous expense confirmed");
        self.expense
    }

    /// Discard the expense
    pub fn reject(self) {
        tracing::info!(id = %self.expense.id, "anomalous expense rejected");
    }
}

/// What became of one candidate
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// Expense ready to be stored
    Committed(Expense),
    /// Expense held back as anomalous
    HeldForReview(PendingReview),
    /// New wishlist goal
    Wishlist(WishlistItem),
}

/// Resolve candidates against the expense history
///
/// Every expense candidate is checked against `history` as it was before
/// this batch; outcomes are returned in candidate order.
pub fn resolve_candidates(
    candidates: Vec<ParsedCandidate>,
    history: &[Expense],
    options: IngestOptions,
) -> Vec<IngestOutcome> {
    candidates
        .into_iter()
        .map(|candidate| resolve_one(candidate, history, options))
        .collect()
}

fn resolve_one(
    candidate: ParsedCandidate,
    history: &[Expense],
    options: IngestOptions,
) -> IngestOutcome {
    match candidate.kind {
        CandidateKind::Wishlist => {
            IngestOutcome::Wishlist(WishlistItem::new(candidate.description, candidate.amount))
        }
        CandidateKind::Expense => {
            let category = Category::resolve_opt(candidate.category.as_deref());
            let expense = Expense::new(
                candidate.amount,
                category,
                candidate.date.unwrap_or(options.today),
            )
            .with_description(candidate.description)
            .excluded_from_stats(options.exclude_from_stats);

            let anomaly = check_anomaly(expense.amount.as_f64(), history, category);
            if anomaly.is_anomaly && options.hold_anomalies {
                tracing::warn!(
                    amount = %expense.amount,
                    %category,
                    average = anomaly.average,
                    "holding anomalous expense for review"
                );
                IngestOutcome::HeldForReview(PendingReview { expense, anomaly })
            } else {
                IngestOutcome::Committed(expense)
            }
        }
    }
}

/// Parse free text and resolve the result
///
/// # Errors
///
/// Propagates parser failures; returns an ingest error when nothing in the
/// input was recognised.
pub fn ingest_text<P: CandidateParser + ?Sized>(
    parser: &P,
    input: &str,
    history: &[Expense],
    options: IngestOptions,
) -> MonospendResult<Vec<IngestOutcome>> {
    let candidates = parser.parse_text(input)?;
    if candidates.is_empty() {
        return Err(MonospendError::Ingest(format!(
            "no expenses or wishlist items recognised in '{}'",
            input.trim()
        )));
    }
    Ok(resolve_candidates(candidates, history, options))
}

/// Parse a receipt image and resolve the result
pub fn ingest_receipt<P: CandidateParser + ?Sized>(
    parser: &P,
    image: &[u8],
    mime_type: &str,
    history: &[Expense],
    options: IngestOptions,
) -> MonospendResult<Vec<IngestOutcome>> {
    let candidates = parser.parse_receipt(image, mime_type)?;
    if candidates.is_empty() {
        return Err(MonospendError::Ingest("no items found on receipt".into()));
    }
    Ok(resolve_candidates(candidates, history, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::plain::PlainTextParser;
    use crate::models::Money;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn food_history(count: usize) -> Vec<Expense> {
        (0..count)
            .map(|_| Expense::new(Money::from_dollars(10), Category::Food, today()))
            .collect()
    }

    struct ReceiptParser;

    impl CandidateParser for ReceiptParser {
        fn parse_text(&self, _input: &str) -> MonospendResult<Vec<ParsedCandidate>> {
            Ok(Vec::new())
        }

        fn parse_receipt(&self, _image: &[u8], _mime: &str) -> MonospendResult<Vec<ParsedCandidate>> {
            Ok(vec![ParsedCandidate::expense(Money::from_cents(899), "Pharmacy")
                .with_category("health")
                .with_date(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap())])
        }
    }

    #[test]
    fn test_expense_defaults() {
        let outcomes = resolve_candidates(
            vec![ParsedCandidate::expense(Money::from_dollars(12), "Lunch")],
            &[],
            IngestOptions::new(today()).exclude_from_stats(true),
        );

        match &outcomes[0] {
            IngestOutcome::Committed(expense) => {
                assert_eq!(expense.category, Category::Other);
                assert_eq!(expense.date, today());
                assert!(expense.exclude_from_stats);
                assert_eq!(expense.description, "Lunch");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let outcomes = resolve_candidates(
            vec![ParsedCandidate::expense(Money::from_dollars(5), "Gum").with_category("Snacks")],
            &[],
            IngestOptions::new(today()),
        );
        assert!(matches!(
            &outcomes[0],
            IngestOutcome::Committed(e) if e.category == Category::Other
        ));
    }

    #[test]
    fn test_anomaly_is_held_and_confirmed_unchanged() {
        let history = food_history(5);
        let candidate = ParsedCandidate::expense(Money::from_dollars(60), "Feast").with_category("Food");

        let outcomes = resolve_candidates(vec![candidate], &history, IngestOptions::new(today()));

        let IngestOutcome::HeldForReview(pending) = outcomes[0].clone() else {
            panic!("expected a held expense");
        };
        assert!(pending.anomaly().is_anomaly);
        assert_eq!(pending.anomaly().average, 10.0);
        assert!(pending.warning().contains("Food"));

        let held = pending.expense().clone();
        let committed = pending.confirm();
        assert_eq!(committed, held);
        assert_eq!(committed.amount, Money::from_dollars(60));
    }

    #[test]
    fn test_reject_discards() {
        let history = food_history(6);
        let candidate = ParsedCandidate::expense(Money::from_dollars(90), "Feast").with_category("food");
        let mut outcomes = resolve_candidates(vec![candidate], &history, IngestOptions::new(today()));

        if let Some(IngestOutcome::HeldForReview(pending)) = outcomes.pop() {
            pending.reject();
        } else {
            panic!("expected a held expense");
        }
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_hold_disabled_commits_anomaly() {
        let history = food_history(5);
        let candidate = ParsedCandidate::expense(Money::from_dollars(60), "Feast").with_category("Food");
        let outcomes = resolve_candidates(
            vec![candidate],
            &history,
            IngestOptions::new(today()).hold_anomalies(false),
        );
        assert!(matches!(outcomes[0], IngestOutcome::Committed(_)));
    }

    #[test]
    fn test_short_history_never_holds() {
        let history = food_history(4);
        let candidate = ParsedCandidate::expense(Money::from_dollars(1000), "TV").with_category("Food");
        let outcomes = resolve_candidates(vec![candidate], &history, IngestOptions::new(today()));
        assert!(matches!(outcomes[0], IngestOutcome::Committed(_)));
    }

    #[test]
    fn test_ingest_text_mixed_batch() {
        let history = food_history(5);
        let outcomes = ingest_text(
            &PlainTextParser::new(),
            "Lunch 12 food, Banquet 80 food, wishlist Bike 500",
            &history,
            IngestOptions::new(today()),
        )
        .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], IngestOutcome::Committed(_)));
        assert!(matches!(outcomes[1], IngestOutcome::HeldForReview(_)));
        match &outcomes[2] {
            IngestOutcome::Wishlist(item) => {
                assert_eq!(item.name, "Bike");
                assert_eq!(item.cost, Money::from_dollars(500));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_ingest_text_nothing_recognised() {
        let err = ingest_text(
            &PlainTextParser::new(),
            "good morning",
            &[],
            IngestOptions::new(today()),
        )
        .unwrap_err();
        assert!(matches!(err, MonospendError::Ingest(_)));
    }

    #[test]
    fn test_ingest_receipt_uses_candidate_date() {
        let outcomes = ingest_receipt(
            &ReceiptParser,
            b"png",
            "image/png",
            &[],
            IngestOptions::new(today()),
        )
        .unwrap();

        match &outcomes[0] {
            IngestOutcome::Committed(expense) => {
                assert_eq!(expense.category, Category::Health);
                assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
