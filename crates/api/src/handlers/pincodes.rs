//! Serviceable-pincode add/edit forms (plain JSON).

use std::sync::LazyLock;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::listing;
use crate::middleware::auth::AdminSession;
use crate::resources::{Pincodes, Resource};
use crate::response::DataResponse;
use crate::state::AppState;

static PINCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("static regex"));

/// Request body for pincode create/update.
#[derive(Debug, Deserialize, Validate)]
pub struct PincodePayload {
    #[validate(regex(path = *PINCODE, message = "Pincode must be 6 digits"))]
    pub code: String,
    #[serde(default)]
    pub active: bool,
}

impl PincodePayload {
    fn to_upstream(&self) -> Value {
        serde_json::json!({"code": self.code, "active": self.active})
    }
}

/// POST /api/v1/pincodes
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<PincodePayload>,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    payload.validate()?;

    let body = state
        .upstream
        .create(
            &Pincodes::PATHS.add(),
            &payload.to_upstream(),
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Pincodes>(&state, body).await?;
    tracing::info!(code = %payload.code, "Pincode created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/pincodes/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PincodePayload>,
) -> AppResult<Json<DataResponse<Value>>> {
    payload.validate()?;

    let body = state
        .upstream
        .update(
            &Pincodes::PATHS.update(&id),
            &payload.to_upstream(),
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Pincodes>(&state, body).await?;
    tracing::info!(id = %id, "Pincode updated");

    Ok(Json(DataResponse { data: record }))
}
