//! Subcategory add/edit forms. Same shape as categories plus a required
//! parent category reference.

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
use crate::resources::{Resource, Subcategories};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Validate)]
struct SubcategoryForm {
    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    name: String,
    #[validate(length(min = 1, message = "Parent category is required"))]
    category: String,
}

fn subcategory_fields(form: &mut forms::FormPayload) -> AppResult<Vec<(&'static str, String)>> {
    let name = form.take_or_default("name");
    let category = form.take_or_default("category");
    let slug_input = form.take("slug");

    let submission = SubcategoryForm {
        name: name.clone(),
        category: category.clone(),
    };
    submission.validate()?;

    let slug = generate_slug(slug_input.as_deref().unwrap_or(&name));
    if slug.is_empty() {
        return Err(CoreError::Validation("Name must contain letters or digits".into()).into());
    }

    Ok(vec![("name", name), ("slug", slug), ("category", category)])
}

/// POST /api/v1/subcategories
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    let mut form = forms::read_form(multipart).await?;
    let fields = subcategory_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::POST,
            &Subcategories::PATHS.add(),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Subcategories>(&state, body).await?;
    tracing::info!(name = %record["name"], "Subcategory created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/subcategories/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Value>>> {
    let mut form = forms::read_form(multipart).await?;
    let fields = subcategory_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::PUT,
            &Subcategories::PATHS.update(&id),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Subcategories>(&state, body).await?;
    tracing::info!(id = %id, "Subcategory updated");

    Ok(Json(DataResponse { data: record }))
}
