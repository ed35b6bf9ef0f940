//! Blog add/edit forms (multipart: title, author, content, optional slug,
//! optional cover image). The content field arrives as HTML from the
//! editor widget; it is forwarded untouched.

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
use crate::resources::{Blogs, Resource};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Validate)]
struct BlogForm {
    #[validate(length(min = 2, max = 160, message = "Title must be 2-160 characters"))]
    title: String,
    #[validate(length(min = 2, max = 80, message = "Author must be 2-80 characters"))]
    author: String,
    #[validate(length(min = 20, message = "Content must be at least 20 characters"))]
    content: String,
}

fn blog_fields(form: &mut forms::FormPayload) -> AppResult<Vec<(&'static str, String)>> {
    let title = form.take_or_default("title");
    let author = form.take_or_default("author");
    let content = form.take_or_default("content");
    let slug_input = form.take("slug");

    let submission = BlogForm {
        title: title.clone(),
        author: author.clone(),
        content: content.clone(),
    };
    submission.validate()?;

    let slug = generate_slug(slug_input.as_deref().unwrap_or(&title));
    if slug.is_empty() {
        return Err(CoreError::Validation("Title must contain letters or digits".into()).into());
    }

    Ok(vec![
        ("title", title),
        ("slug", slug),
        ("author", author),
        ("content", content),
    ])
}

/// POST /api/v1/blogs
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    let mut form = forms::read_form(multipart).await?;
    let fields = blog_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::POST,
            &Blogs::PATHS.add(),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Blogs>(&state, body).await?;
    tracing::info!(title = %record["title"], "Blog created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/blogs/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Value>>> {
    let mut form = forms::read_form(multipart).await?;
    let fields = blog_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::PUT,
            &Blogs::PATHS.update(&id),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Blogs>(&state, body).await?;
    tracing::info!(id = %id, "Blog updated");

    Ok(Json(DataResponse { data: record }))
}
