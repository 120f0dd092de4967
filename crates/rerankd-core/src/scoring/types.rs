use serde::{Deserialize, Serialize};

/// Relevance score for one document of a rerank request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Zero-based position of the document in the request.
    pub index: usize,
    /// Sigmoid-normalized relevance in `[0, 1]`.
    pub score: f32,
}

impl ScoreResult {
    pub fn new(index: usize, score: f32) -> Self {
        Self { index, score }
    }
}
