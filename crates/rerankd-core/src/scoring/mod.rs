//! Relevance scoring over the cross-encoder.
//!
//! [`RelevanceScorer`] turns a query and its candidate documents into one
//! [`ScoreResult`] per document: the model's raw logit squashed through
//! [`sigmoid`] into `[0, 1]`, tagged with the document's original index.
//!
//! Results stay in input order. Sigmoid is strictly increasing, so the rank
//! order of scores equals the rank order of the raw logits; reordering by
//! score is the caller's job.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::{RelevanceScorer, sigmoid};
pub use types::ScoreResult;
