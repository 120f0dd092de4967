use std::path::PathBuf;

/// Hub identifier loaded when no override is configured.
pub const DEFAULT_MODEL_REPO: &str = "cross-encoder/ms-marco-MiniLM-L-6-v2";

/// Maximum sequence length for a tokenized pair; longer inputs are truncated.
pub const MAX_SEQ_LEN: usize = 512;

/// Pairs per forward pass. Internal chunking only; callers always get one
/// logit per pair regardless of how the batch is split.
pub const BATCH_SIZE: usize = 64;

#[derive(Debug, Clone)]
pub struct CrossEncoderConfig {
    /// Hub identifier to fetch at load time.
    pub model_repo: Option<String>,

    /// Local model directory (config.json, tokenizer.json,
    /// model.safetensors). Takes precedence over `model_repo`.
    pub model_path: Option<PathBuf>,
}

impl Default for CrossEncoderConfig {
    fn default() -> Self {
        Self {
            model_repo: Some(DEFAULT_MODEL_REPO.to_string()),
            model_path: None,
        }
    }
}

impl CrossEncoderConfig {
    pub fn new<S: Into<String>>(model_repo: S) -> Self {
        Self {
            model_repo: Some(model_repo.into()),
            model_path: None,
        }
    }

    pub fn local<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_repo: None,
            model_path: Some(model_path.into()),
        }
    }

    /// No model source at all: the deterministic lexical stub.
    pub fn stub() -> Self {
        Self {
            model_repo: None,
            model_path: None,
        }
    }

    pub fn is_stub(&self) -> bool {
        self.model_repo.is_none() && self.model_path.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref repo) = self.model_repo
            && repo.trim().is_empty()
        {
            return Err("model_repo cannot be empty when provided".to_string());
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        Ok(())
    }
}
