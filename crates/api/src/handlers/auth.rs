//! Handlers for the `/auth` resource (login, verify, logout).
//!
//! The backend owns the credential store and token issuance; these
//! handlers proxy it. Logout has no server-side effect -- the client
//! discards its token -- but the endpoint exists so the flow is explicit.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bloomcart_core::error::CoreError;
use bloomcart_upstream::auth::{AuthSession, AuthState};
use bloomcart_upstream::UpstreamError;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Guard state as reported to clients.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// `"authenticated"` or `"unauthenticated"`.
    pub state: &'static str,
}

/// POST /api/v1/auth/login
///
/// Proxy admin credentials to the backend; a 401 from upstream becomes a
/// uniform invalid-credentials error.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    input.validate()?;

    let token = match state.upstream.admin_login(&input.email, &input.password).await {
        Ok(token) => token,
        Err(UpstreamError::Api {
            status: 400 | 401 | 403,
            ..
        }) => {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid email or password".into(),
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(email = %input.email, "Admin login succeeded");

    Ok(Json(DataResponse {
        data: LoginResponse { token },
    }))
}

/// GET /api/v1/auth/verify
///
/// Report the guard state for whatever token the client presented. Always
/// 200: the *state* is the answer, redirecting is the client's decision.
pub async fn verify(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> AppResult<Json<DataResponse<VerifyResponse>>> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned);

    let mut session = AuthSession::from_token(token);
    let verified = match session.token_to_verify() {
        Some(t) => state.upstream.verify_token(t).await?,
        None => false,
    };
    session.resolve(verified);

    let state_name = match session.state() {
        AuthState::Authenticated => "authenticated",
        _ => "unauthenticated",
    };

    Ok(Json(DataResponse {
        data: VerifyResponse { state: state_name },
    }))
}

/// POST /api/v1/auth/logout
///
/// Token discard happens client-side; acknowledge with 204.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
