//! Category add/edit forms (multipart: name, optional slug, optional image).

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use bloomcart_core::error::CoreError;
use bloomcart_core::slug::generate_slug;
use reqwest::Method;
use serde_json::Value;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::{forms, listing};
use crate::middleware::auth::AdminSession;
use crate::resources::{Categories, Resource};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Validate)]
struct CategoryForm {
    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    name: String,
}

/// Validate the submission and produce the upstream text fields.
///
/// The slug auto-fills from the name; an operator-provided slug wins but
/// passes through the same transform (idempotent for slug-like input).
fn category_fields(form: &mut forms::FormPayload) -> AppResult<Vec<(&'static str, String)>> {
    let name = form.take_or_default("name");
    let slug_input = form.take("slug");

    let submission = CategoryForm { name: name.clone() };
    submission.validate()?;

    let slug = generate_slug(slug_input.as_deref().unwrap_or(&name));
    if slug.is_empty() {
        return Err(CoreError::Validation("Name must contain letters or digits".into()).into());
    }

    Ok(vec![("name", name), ("slug", slug)])
}

/// POST /api/v1/categories
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    let mut form = forms::read_form(multipart).await?;
    let fields = category_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::POST,
            &Categories::PATHS.add(),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Categories>(&state, body).await?;
    tracing::info!(name = %record["name"], "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Value>>> {
    let mut form = forms::read_form(multipart).await?;
    let fields = category_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::PUT,
            &Categories::PATHS.update(&id),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Categories>(&state, body).await?;
    tracing::info!(id = %id, "Category updated");

    Ok(Json(DataResponse { data: record }))
}
