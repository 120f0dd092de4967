//! Rerankd library crate (used by the server and integration tests).
//!
//! Scores `(query, document)` pairs with a pretrained cross-encoder and maps
//! the raw logits to `[0, 1]` relevance scores.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`CrossEncoder`], [`CrossEncoderConfig`] - The loaded scoring model
//! - [`RelevanceScorer`], [`ScoreResult`] - Request-shaped scoring on top of
//!   the model
//!
//! The model is loaded once at startup and shared read-only for the lifetime
//! of the process; nothing in this crate mutates it afterwards. A
//! deterministic stub mode ([`CrossEncoderConfig::stub`]) stands in for real
//! weights in tests and model-less development runs.

pub mod config;
pub mod model;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use model::{
    BATCH_SIZE, CrossEncoder, CrossEncoderConfig, DEFAULT_MODEL_REPO, INFERENCE_THREADS,
    MAX_SEQ_LEN, ModelError, ModelFiles, init_inference_threads,
};
pub use scoring::{RelevanceScorer, ScoreResult, ScoringError, sigmoid};
