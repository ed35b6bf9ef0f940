//! REST client for the e-commerce backend, using [`reqwest`].
//!
//! One client instance is shared across the whole gateway; reqwest pools
//! connections internally. Every mutating call carries the admin bearer
//! token -- reads go out unauthenticated, matching the backend's access
//! model for collection endpoints.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

use crate::envelope;
use crate::error::UpstreamError;

/// HTTP client for the external e-commerce API.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client for the backend at `base_url` (e.g.
    /// `https://api.example.com/api`), with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Whether the backend answers at all. Used by the health endpoint;
    /// any HTTP response (including 404) counts as reachable.
    pub async fn ping(&self) -> bool {
        self.http.get(self.url("")).send().await.is_ok()
    }

    // ---- reads ----

    /// GET a collection endpoint and normalize the envelope into an
    /// ordered record sequence.
    pub async fn fetch_records(&self, path: &str) -> Result<Vec<Value>, UpstreamError> {
        let body = self.get_json(path, &[]).await?;
        Ok(envelope::records(body))
    }

    /// GET a collection endpoint with query parameters (server-side
    /// pagination) and return the raw body alongside the normalized rows.
    pub async fn fetch_records_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(Vec<Value>, Value), UpstreamError> {
        let body = self.get_json(path, query).await?;
        let rows = envelope::records(body.clone());
        Ok((rows, body))
    }

    /// GET a single record. A 404 from upstream maps to `Ok(None)` so the
    /// caller can produce its own not-found error with entity context.
    pub async fn fetch_record(&self, path: &str) -> Result<Option<Value>, UpstreamError> {
        match self.get_json(path, &[]).await {
            Ok(body) => Ok(envelope::record(body)),
            Err(UpstreamError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // ---- mutations (always bearer-authenticated) ----

    /// POST a JSON payload to a create endpoint.
    pub async fn create(
        &self,
        path: &str,
        payload: &Value,
        token: &str,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// PUT a JSON payload to an update endpoint.
    pub async fn update(
        &self,
        path: &str,
        payload: &Value,
        token: &str,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// DELETE a record.
    pub async fn delete(&self, path: &str, token: &str) -> Result<(), UpstreamError> {
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Send a multipart form (text fields + image parts) to a create or
    /// update endpoint.
    pub async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
        token: &str,
    ) -> Result<Value, UpstreamError> {
        tracing::debug!(%method, path, "upstream multipart");
        let response = self
            .http
            .request(method, self.url(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// POST a JSON payload without authentication (login only).
    pub(crate) async fn post_public(
        &self,
        path: &str,
        payload: &Value,
    ) -> Result<Value, UpstreamError> {
        let response = self.http.post(self.url(path)).json(payload).send().await?;
        Self::parse_json(response).await
    }

    /// GET with a bearer token, returning the raw response so the caller
    /// can branch on the status before deciding whether to read the body.
    pub(crate) async fn get_authorized(
        &self,
        path: &str,
        token: &str,
    ) -> Result<reqwest::Response, UpstreamError> {
        Ok(self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    // ---- private helpers ----

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, UpstreamError> {
        tracing::debug!(path, "upstream GET");
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or [`UpstreamError::Api`] with the status and
    /// body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful response body as JSON. An empty body becomes
    /// `Value::Null` (some mutation endpoints respond with no content).
    async fn parse_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| UpstreamError::Decode(format!("invalid JSON from upstream: {e}")))
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), UpstreamError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
