use std::path::{Path, PathBuf};

use tracing::info;

use super::error::ModelError;

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHTS_FILE: &str = "model.safetensors";

/// Resolved locations of the three artifacts a cross-encoder needs.
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
}

impl ModelFiles {
    /// Resolves artifacts from a local model directory.
    pub fn from_dir<P: AsRef<Path>>(model_dir: P) -> Result<Self, ModelError> {
        let model_dir = model_dir.as_ref();

        if !model_dir.exists() {
            return Err(ModelError::Load(format!(
                "model path not found: {}",
                model_dir.display()
            )));
        }

        let files = Self {
            config: model_dir.join(CONFIG_FILE),
            tokenizer: model_dir.join(TOKENIZER_FILE),
            weights: model_dir.join(WEIGHTS_FILE),
        };

        for path in [&files.config, &files.tokenizer, &files.weights] {
            if !path.exists() {
                return Err(ModelError::Load(format!(
                    "missing model artifact: {}",
                    path.display()
                )));
            }
        }

        Ok(files)
    }

    /// Fetches artifacts from the hub by repo identifier.
    ///
    /// Files already present in the local hub cache are not re-downloaded, so
    /// after the first run this resolves without touching the network.
    pub fn fetch(repo_id: &str) -> Result<Self, ModelError> {
        use hf_hub::api::sync::Api;

        let api = Api::new().map_err(|e| ModelError::Fetch(e.to_string()))?;
        let repo = api.model(repo_id.to_string());

        let fetch_file = |file: &str| {
            repo.get(file)
                .map_err(|e| ModelError::Fetch(format!("{repo_id}/{file}: {e}")))
        };

        let files = Self {
            config: fetch_file(CONFIG_FILE)?,
            tokenizer: fetch_file(TOKENIZER_FILE)?,
            weights: fetch_file(WEIGHTS_FILE)?,
        };

        info!(model = %repo_id, weights = %files.weights.display(), "Model artifacts ready");

        Ok(files)
    }
}
