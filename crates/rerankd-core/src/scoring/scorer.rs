use tracing::debug;

use crate::model::{CrossEncoder, CrossEncoderConfig};

use super::error::ScoringError;
use super::types::ScoreResult;

/// Maps a logit onto `(0, 1)`.
///
/// Strictly increasing with `sigmoid(0) == 0.5`, so relative ranking of
/// logits survives the transform.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Stateless scoring on top of one loaded [`CrossEncoder`].
pub struct RelevanceScorer {
    cross_encoder: CrossEncoder,
}

impl std::fmt::Debug for RelevanceScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceScorer")
            .field("cross_encoder", &self.cross_encoder)
            .finish()
    }
}

impl RelevanceScorer {
    pub fn new(config: CrossEncoderConfig) -> Result<Self, ScoringError> {
        let cross_encoder = CrossEncoder::load(config)?;
        Ok(Self { cross_encoder })
    }

    pub fn stub() -> Result<Self, ScoringError> {
        Ok(Self {
            cross_encoder: CrossEncoder::stub()?,
        })
    }

    pub fn is_model_loaded(&self) -> bool {
        self.cross_encoder.is_model_loaded()
    }

    pub fn cross_encoder(&self) -> &CrossEncoder {
        &self.cross_encoder
    }

    /// Scores a single `(query, document)` pair.
    pub fn score(&self, query: &str, document: &str) -> Result<f32, ScoringError> {
        let logits = self.cross_encoder.predict(&[(query, document)])?;
        Ok(sigmoid(logits[0]))
    }

    /// Scores every document against the query, one result per document in
    /// input order (`results[i].index == i`).
    ///
    /// The whole batch goes through the model in one call; any inference
    /// failure fails the whole batch. An empty document list short-circuits
    /// without touching the model.
    pub fn score_documents(
        &self,
        query: &str,
        documents: &[String],
    ) -> Result<Vec<ScoreResult>, ScoringError> {
        if documents.is_empty() {
            debug!("No documents to score");
            return Ok(Vec::new());
        }

        debug!(
            query_len = query.len(),
            num_documents = documents.len(),
            "Scoring documents"
        );

        let pairs: Vec<(&str, &str)> = documents.iter().map(|d| (query, d.as_str())).collect();
        let logits = self.cross_encoder.predict(&pairs)?;

        Ok(logits
            .into_iter()
            .enumerate()
            .map(|(index, logit)| ScoreResult::new(index, sigmoid(logit)))
            .collect())
    }
}
