use thiserror::Error;

/// Errors from model artifact resolution, loading and inference.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to fetch model artifacts: {0}")]
    Fetch(String),

    #[error("failed to load cross-encoder model: {0}")]
    Load(String),

    #[error("tokenization failed: {0}")]
    Tokenize(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("invalid model configuration: {0}")]
    InvalidConfig(String),
}

impl From<candle_core::Error> for ModelError {
    fn from(err: candle_core::Error) -> Self {
        Self::Inference(err.to_string())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        Self::Load(err.to_string())
    }
}
