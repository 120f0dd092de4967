//! Cross-encoder model hosting.
//!
//! - [`CrossEncoder`] holds the loaded model for the lifetime of the process
//!   and turns batches of `(query, document)` pairs into raw logits.
//! - [`ModelFiles`] resolves the model artifacts, either from a local
//!   directory or from the hub by identifier (one network fetch, at load
//!   time only).

/// BERT classifier wrapper used by the cross-encoder.
pub mod bert;
mod config;
mod cross_encoder;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
mod fetch;
mod threads;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::{BATCH_SIZE, CrossEncoderConfig, DEFAULT_MODEL_REPO, MAX_SEQ_LEN};
pub use cross_encoder::CrossEncoder;
pub use error::ModelError;
pub use fetch::ModelFiles;
pub use threads::{INFERENCE_THREADS, init_inference_threads};
