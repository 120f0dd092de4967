//! HTTP client helpers for tests.

use serde::Deserialize;
use std::time::Duration;

use rerankd::scoring::ScoreResult;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStatus {
    pub http: String,
    pub model: String,
    pub model_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn rerank(
        &self,
        query: &str,
        documents: &[&str],
    ) -> Result<Vec<ScoreResult>, TestClientError> {
        let body = serde_json::json!({"query": query, "documents": documents});
        let resp = self
            .client
            .post(self.url("/rerank"))
            .json(&body)
            .send()
            .await?;

        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 | 422 => Err(TestClientError::BadRequest(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    /// Sends an arbitrary JSON body, returning the raw status and text so
    /// malformed-request tests can assert on both.
    pub async fn rerank_raw(
        &self,
        body: &serde_json::Value,
    ) -> Result<(u16, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/rerank"))
            .json(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        Ok((status, resp.text().await.unwrap_or_default()))
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        self.get_json("/health").await
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        self.get_json("/ready").await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, TestClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = self.client.get(self.url(path)).send().await?;
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            Err(TestClientError::UnexpectedStatus(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ))
        }
    }
}
