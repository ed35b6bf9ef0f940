/// Errors from the upstream REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status code.
    #[error("Upstream API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Upstream returned a 2xx response whose body was not the shape
    /// the caller needed (e.g. a login response without a token).
    #[error("Unexpected upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Status code of an [`UpstreamError::Api`] response, if that's what
    /// this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
