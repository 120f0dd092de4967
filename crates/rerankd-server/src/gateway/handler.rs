use std::time::Instant;

use axum::{Json, extract::State};
use tracing::{debug, info, instrument};

use rerankd::scoring::ScoreResult;

use crate::gateway::error::GatewayError;
use crate::gateway::payload::RerankRequest;
use crate::gateway::state::HandlerState;

/// Scores every document in the request against the query.
///
/// The response is a plain array of `{index, score}` objects, one per input
/// document, in input order. Shape errors never reach the model; any
/// inference failure fails the whole request.
#[instrument(skip(state, request), fields(documents = tracing::field::Empty))]
pub async fn rerank_handler(
    State(state): State<HandlerState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<Vec<ScoreResult>>, GatewayError> {
    let request: RerankRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    let doc_count = request.documents.len();
    tracing::Span::current().record("documents", doc_count);

    debug!(query_len = request.query.len(), "Processing rerank request");

    let start = Instant::now();
    let results = state
        .scorer
        .score_documents(&request.query, &request.documents)?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    info!(
        documents = doc_count,
        elapsed_ms = elapsed_ms,
        "Rerank complete"
    );

    Ok(Json(results))
}
