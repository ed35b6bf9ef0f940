use std::sync::Arc;

use bloomcart_upstream::UpstreamClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Client for the external e-commerce backend.
    pub upstream: Arc<UpstreamClient>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
