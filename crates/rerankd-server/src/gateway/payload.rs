use serde::{Deserialize, Serialize};

/// Body of a `POST /rerank` call.
///
/// `documents` may be empty (the response is then an empty array). No
/// document-count cap is enforced here; per-document text is bounded by the
/// tokenizer's truncation length.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<String>,
}
