//! Route guard: bearer-token authentication extractor for Axum handlers.
//!
//! The gateway holds no credential store; the presented token is verified
//! against the backend's admin verify endpoint on every guarded request.
//! There is no caching and no refresh -- a rejected token means the client
//! must log in again.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bloomcart_core::error::CoreError;
use bloomcart_upstream::auth::AuthSession;

use crate::error::AppError;
use crate::state::AppState;

/// Verified admin session extracted from a `Authorization: Bearer <token>`
/// header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::debug!("token verified");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The verified bearer token, forwarded on mutating upstream calls.
    pub token: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let mut session = AuthSession::from_token(Some(token.to_string()));
        let verified = match session.token_to_verify() {
            Some(t) => state.upstream.verify_token(t).await?,
            None => false,
        };
        session.resolve(verified);

        match session.token() {
            Some(token) => Ok(AdminSession {
                token: token.to_string(),
            }),
            None => Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired token".into(),
            ))),
        }
    }
}
