//! Product add/edit forms: the richest screen -- text fields, pricing,
//! stock, category references, and up to four gallery images.

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
use crate::resources::{Products, Resource};
use crate::response::DataResponse;
use crate::state::AppState;

/// Gallery limit per product.
const MAX_PRODUCT_IMAGES: usize = 4;

#[derive(Debug, Validate)]
struct ProductForm {
    #[validate(length(min = 2, max = 120, message = "Name must be 2-120 characters"))]
    name: String,
    #[validate(length(min = 1, max = 40, message = "SKU is required (max 40 characters)"))]
    sku: String,
    #[validate(length(min = 1, message = "Category is required"))]
    category: String,
    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    price: f64,
    #[validate(range(min = 0.0, message = "Stock cannot be negative"))]
    stock: f64,
}

fn parse_number(form: &mut forms::FormPayload, name: &str) -> AppResult<Option<f64>> {
    match form.take(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<f64>().map(Some).map_err(|_| {
            CoreError::Validation(format!("Field '{name}' must be a number")).into()
        }),
    }
}

/// Validate the submission and produce the upstream text fields.
fn product_fields(form: &mut forms::FormPayload) -> AppResult<Vec<(&'static str, String)>> {
    let name = form.take_or_default("name");
    let sku = form.take_or_default("sku");
    let category = form.take_or_default("category");
    let slug_input = form.take("slug");
    let price = parse_number(form, "price")?.unwrap_or(0.0);
    let sale_price = parse_number(form, "sale_price")?;
    let stock = parse_number(form, "stock")?.unwrap_or(0.0);

    let submission = ProductForm {
        name: name.clone(),
        sku: sku.clone(),
        category: category.clone(),
        price,
        stock,
    };
    submission.validate()?;

    if stock.fract() != 0.0 {
        return Err(CoreError::Validation("Stock must be a whole number".into()).into());
    }
    if let Some(sale) = sale_price {
        if sale <= 0.0 || sale > price {
            return Err(CoreError::Validation(
                "Sale price must be positive and not exceed the price".into(),
            )
            .into());
        }
    }

    let slug = generate_slug(slug_input.as_deref().unwrap_or(&name));
    if slug.is_empty() {
        return Err(CoreError::Validation("Name must contain letters or digits".into()).into());
    }

    let mut fields = vec![
        ("name", name),
        ("sku", sku),
        ("slug", slug),
        ("category", category),
        ("price", price.to_string()),
        ("stock", (stock as u64).to_string()),
    ];
    if let Some(sale) = sale_price {
        fields.push(("salePrice", sale.to_string()));
    }
    if let Some(subcategory) = form.take("subcategory") {
        fields.push(("subcategory", subcategory));
    }
    if let Some(description) = form.take("description") {
        fields.push(("description", description));
    }

    Ok(fields)
}

fn check_image_count(form: &forms::FormPayload) -> AppResult<()> {
    if form.images.len() > MAX_PRODUCT_IMAGES {
        return Err(CoreError::Validation(format!(
            "At most {MAX_PRODUCT_IMAGES} images are allowed"
        ))
        .into());
    }
    Ok(())
}

/// POST /api/v1/products
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    let mut form = forms::read_form(multipart).await?;
    check_image_count(&form)?;
    let fields = product_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::POST,
            &Products::PATHS.add(),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Products>(&state, body).await?;
    tracing::info!(name = %record["name"], sku = %record["sku"], "Product created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Value>>> {
    let mut form = forms::read_form(multipart).await?;
    check_image_count(&form)?;
    let fields = product_fields(&mut form)?;

    let upstream_form = forms::into_upstream_form(fields, form.images)?;
    let body = state
        .upstream
        .send_multipart(
            Method::PUT,
            &Products::PATHS.update(&id),
            upstream_form,
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Products>(&state, body).await?;
    tracing::info!(id = %id, "Product updated");

    Ok(Json(DataResponse { data: record }))
}
