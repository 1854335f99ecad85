//! Data-entry boundary
//!
//! Candidates produced by a [`CandidateParser`] are resolved into expenses or
//! wishlist goals. Category labels are resolved here, missing dates default
//! to the ingest day and anomalous expenses are held for review.

pub mod candidate;
pub mod plain;
pub mod review;

pub use candidate::{CandidateKind, CandidateParser, ParsedCandidate};
pub use plain::PlainTextParser;
pub use review::{
    ingest_receipt, ingest_text, resolve_candidates, IngestOptions, IngestOutcome, PendingReview,
};
