use std::collections::HashSet;

use candle_core::Tensor;
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::bert::BertClassifier;
use super::config::{BATCH_SIZE, CrossEncoderConfig, MAX_SEQ_LEN};
use super::device::select_device;
use super::error::ModelError;
use super::fetch::ModelFiles;
use super::utils::load_tokenizer;

/// Slope applied to the stub's lexical overlap before it leaves as a logit.
const STUB_LOGIT_SCALE: f32 = 8.0;

/// Filtered out of the stub's overlap computation so that function words
/// never count as a match.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
    "from", "as", "into", "through", "during", "before", "after", "above", "below", "between",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "and", "but", "if", "or", "because",
    "until", "while", "what", "which", "who", "whom", "this", "that", "these", "those", "am",
    "it", "its",
];

/// A loaded cross-encoder scoring model.
///
/// Created once at startup, immutable afterwards; concurrent `predict` calls
/// share the same weights read-only. Without a model source the encoder runs
/// in stub mode, scoring pairs with a deterministic lexical overlap proxy.
pub struct CrossEncoder {
    device: candle_core::Device,
    config: CrossEncoderConfig,
    model: Option<BertClassifier>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for CrossEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossEncoder")
            .field("device", &self.device)
            .field("config", &self.config)
            .field("model_loaded", &self.is_model_loaded())
            .finish()
    }
}

impl CrossEncoder {
    pub fn load(config: CrossEncoderConfig) -> Result<Self, ModelError> {
        config.validate().map_err(ModelError::InvalidConfig)?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for cross-encoder");

        let files = if let Some(ref model_path) = config.model_path {
            info!(model_path = %model_path.display(), "Loading cross-encoder from local directory");
            ModelFiles::from_dir(model_path)?
        } else if let Some(ref repo) = config.model_repo {
            info!(model = %repo, "Resolving cross-encoder artifacts");
            ModelFiles::fetch(repo)?
        } else {
            info!("No model source configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                model: None,
                tokenizer: None,
            });
        };

        let model = BertClassifier::load(&files.config, &files.weights, &device)
            .map_err(|e| ModelError::Load(format!("BERT model: {e}")))?;

        let tokenizer = load_tokenizer(&files.tokenizer, MAX_SEQ_LEN)
            .map_err(|e| ModelError::Load(format!("tokenizer: {e}")))?;

        info!("Cross-encoder model loaded");

        Ok(Self {
            device,
            config,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    pub fn stub() -> Result<Self, ModelError> {
        Self::load(CrossEncoderConfig::stub())
    }

    /// Scores a batch of `(query, document)` pairs, one raw logit per pair in
    /// input order.
    ///
    /// The batch is split into fixed-size chunks internally; each pair's
    /// logit depends only on that pair and the loaded weights, so chunking
    /// never changes the output.
    pub fn predict(&self, pairs: &[(&str, &str)]) -> Result<Vec<f32>, ModelError> {
        debug!(
            num_pairs = pairs.len(),
            model_loaded = self.is_model_loaded(),
            "Scoring pairs"
        );

        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        if let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) {
            let mut logits = Vec::with_capacity(pairs.len());
            for chunk in pairs.chunks(BATCH_SIZE) {
                logits.extend(self.forward_chunk(model, tokenizer, chunk)?);
            }
            return Ok(logits);
        }

        Ok(pairs
            .iter()
            .map(|(query, document)| lexical_logit(query, document))
            .collect())
    }

    fn forward_chunk(
        &self,
        model: &BertClassifier,
        tokenizer: &Tokenizer,
        chunk: &[(&str, &str)],
    ) -> Result<Vec<f32>, ModelError> {
        let encodings = tokenizer
            .encode_batch(chunk.to_vec(), true)
            .map_err(|e| ModelError::Tokenize(e.to_string()))?;

        // Padding is batch-longest, so every row has the same width.
        let rows = encodings.len();
        let cols = encodings[0].get_ids().len();

        let ids: Vec<u32> = encodings
            .iter()
            .flat_map(|e| e.get_ids().iter().copied())
            .collect();
        let input_ids = Tensor::from_vec(ids, (rows, cols), &self.device)?;

        let type_ids: Vec<u32> = encodings
            .iter()
            .flat_map(|e| e.get_type_ids().iter().copied())
            .collect();
        let token_type_ids = Tensor::from_vec(type_ids, (rows, cols), &self.device)?;

        let mask: Vec<u32> = encodings
            .iter()
            .flat_map(|e| e.get_attention_mask().iter().copied())
            .collect();
        let attention_mask = Tensor::from_vec(mask, (rows, cols), &self.device)?;

        let logits = model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        Ok(logits.flatten_all()?.to_vec1::<f32>()?)
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &CrossEncoderConfig {
        &self.config
    }

    pub fn device(&self) -> &candle_core::Device {
        &self.device
    }
}

fn content_words(lowered: &str) -> HashSet<&str> {
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty() && !STOP_WORDS.contains(w))
        .collect()
}

/// Word-overlap proxy used in stub mode. Deterministic for a given pair and
/// roughly centered so that unrelated texts land well below zero.
fn lexical_logit(query: &str, document: &str) -> f32 {
    let query_lower = query.to_lowercase();
    let document_lower = document.to_lowercase();

    let query_words = content_words(&query_lower);
    let document_words = content_words(&document_lower);

    if query_words.is_empty() {
        let len_ratio = (query.len().min(document.len()) as f32)
            / (query.len().max(document.len()).max(1) as f32);
        return STUB_LOGIT_SCALE * (len_ratio * 0.3 - 0.5);
    }

    let matches = query_words.intersection(&document_words).count();
    let union = query_words.union(&document_words).count();

    let recall = matches as f32 / query_words.len() as f32;
    let jaccard = if union > 0 {
        matches as f32 / union as f32
    } else {
        0.0
    };

    let overlap = 0.6 * recall + 0.4 * jaccard;

    STUB_LOGIT_SCALE * (overlap - 0.5)
}
