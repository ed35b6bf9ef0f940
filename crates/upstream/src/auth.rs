//! Admin authentication against the upstream backend.
//!
//! The gateway holds no credential store of its own: login is proxied to
//! the backend's admin endpoint, and every guarded request re-verifies the
//! presented token upstream. [`AuthSession`] models the token lifecycle --
//! the same three-state guard the dashboard uses: a session starts
//! `Unknown`, and a verification outcome settles it.

use serde_json::{json, Value};

use crate::client::UpstreamClient;
use crate::error::UpstreamError;

/// Upstream route for admin credential login.
const LOGIN_PATH: &str = "admin/login";

/// Upstream route for bearer-token verification.
const VERIFY_PATH: &str = "admin/verify-token";

/// Guard state for an admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// A token may exist but has not been verified yet.
    Unknown,
    /// The token was verified against the backend.
    Authenticated,
    /// No token, or verification failed (token cleared).
    Unauthenticated,
}

/// An admin session: the presented token plus its guard state.
///
/// Transitions:
/// - `Unknown` + no token -> `Unauthenticated`
/// - `Unknown` + verify ok -> `Authenticated`
/// - `Unknown` + verify failed -> `Unauthenticated`, token cleared
/// - `logout()` -> `Unauthenticated`, token cleared (from any state)
///
/// There is no re-verification or refresh once a session is settled.
#[derive(Debug, Clone)]
pub struct AuthSession {
    token: Option<String>,
    state: AuthState,
}

impl AuthSession {
    /// Start a session from whatever token the client presented (or had
    /// stored). The state is `Unknown` until [`resolve`](Self::resolve).
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token,
            state: AuthState::Unknown,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Token awaiting verification. `None` once the session is settled or
    /// when no token was presented.
    pub fn token_to_verify(&self) -> Option<&str> {
        match self.state {
            AuthState::Unknown => self.token.as_deref(),
            _ => None,
        }
    }

    /// The verified token, available only while authenticated.
    pub fn token(&self) -> Option<&str> {
        match self.state {
            AuthState::Authenticated => self.token.as_deref(),
            _ => None,
        }
    }

    /// Settle an `Unknown` session with a verification outcome. A session
    /// without a token settles to `Unauthenticated` regardless of the
    /// outcome; a failed verification clears the token.
    pub fn resolve(&mut self, verified: bool) {
        if self.token.is_none() || !verified {
            self.token = None;
            self.state = AuthState::Unauthenticated;
        } else {
            self.state = AuthState::Authenticated;
        }
    }

    /// Adopt a freshly issued token (successful login).
    pub fn login(&mut self, token: String) {
        self.token = Some(token);
        self.state = AuthState::Authenticated;
    }

    /// Drop the token. Logout is purely client-side; the backend holds no
    /// session to invalidate.
    pub fn logout(&mut self) {
        self.token = None;
        self.state = AuthState::Unauthenticated;
    }
}

impl UpstreamClient {
    /// Authenticate admin credentials against the backend.
    ///
    /// Returns the issued bearer token. The backend responds with either
    /// `{"token": "..."}` or `{"data": {"token": "..."}}`.
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<String, UpstreamError> {
        let body = self
            .post_public(LOGIN_PATH, &json!({"email": email, "password": password}))
            .await?;

        extract_token(&body)
            .ok_or_else(|| UpstreamError::Decode("login response carried no token".into()))
    }

    /// Verify a bearer token against the backend.
    ///
    /// `Ok(true)` on 2xx, `Ok(false)` on 401/403 (the token is simply
    /// invalid), error on anything else.
    pub async fn verify_token(&self, token: &str) -> Result<bool, UpstreamError> {
        let response = self.get_authorized(VERIFY_PATH, token).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Ok(false);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(UpstreamError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// Pull the token out of a login response, wherever the backend put it.
fn extract_token(body: &Value) -> Option<String> {
    let direct = body.get("token");
    let nested = body.get("data").and_then(|d| d.get("token"));

    direct
        .or(nested)
        .and_then(Value::as_str)
        .map(str::to_owned)
}
