use std::sync::Arc;

use rerankd::scoring::RelevanceScorer;

/// Shared request-handler state.
///
/// Holds the one scorer (and through it the one loaded model) constructed at
/// startup; handlers get a cheap clone per request and only ever read it.
#[derive(Clone)]
pub struct HandlerState {
    pub scorer: Arc<RelevanceScorer>,
}

impl HandlerState {
    pub fn new(scorer: Arc<RelevanceScorer>) -> Self {
        Self { scorer }
    }
}
