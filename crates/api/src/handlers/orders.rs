//! Order screens. Orders are the one collection paginated server-side:
//! the backend slices the list and reports the total, so the gateway
//! forwards the page controls instead of filtering locally. Status changes
//! are the only order mutation; orders are never created from the
//! dashboard.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use bloomcart_core::listing::{filter_records, MAX_PAGE_SIZE};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::export;
use crate::handlers::listing;
use crate::middleware::auth::AdminSession;
use crate::query::ListParams;
use crate::resources::{Orders, Resource};
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// Hard ceiling on upstream pages walked by an export, so a backend that
/// keeps serving full pages with a bogus `total` cannot stall the request
/// forever.
const MAX_EXPORT_PAGES: usize = 500;

/// Statuses an operator may move an order into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// Request body for `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// GET /api/v1/orders?page=&page_size=
///
/// Forwards pagination upstream (`?page=&limit=`) and trusts the backend's
/// `total`. Falls back to the served row count when the backend omits it.
pub async fn list_orders(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ListResponse<Value>>> {
    let page = params.page().max(1);
    let page_size = params.page_size().clamp(1, MAX_PAGE_SIZE);

    let (rows, body) = state
        .upstream
        .fetch_records_with_query(
            &Orders::PATHS.list(),
            &[
                ("page", page.to_string()),
                ("limit", page_size.to_string()),
            ],
        )
        .await?;

    let total = body
        .get("total")
        .and_then(Value::as_u64)
        .map(|t| t as usize)
        .unwrap_or(rows.len());

    Ok(Json(ListResponse {
        data: rows,
        page,
        page_size,
        total,
        total_pages: total.div_ceil(page_size),
    }))
}

/// GET /api/v1/orders/export?search=
///
/// The generic export fetches a collection in one call, but the backend
/// pages the order collection server-side, so a single fetch would only
/// cover its first page. This walks the pages at the maximum limit until
/// the reported total is reached (or a short page signals the end), then
/// filters and serializes the whole sequence.
pub async fn export_orders(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let mut records: Vec<Value> = Vec::new();

    for page in 1..=MAX_EXPORT_PAGES {
        let (rows, body) = state
            .upstream
            .fetch_records_with_query(
                &Orders::PATHS.list(),
                &[
                    ("page", page.to_string()),
                    ("limit", MAX_PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        let fetched = rows.len();
        records.extend(rows);

        let total = body
            .get("total")
            .and_then(Value::as_u64)
            .map(|t| t as usize);
        let exhausted = fetched < MAX_PAGE_SIZE || total.is_some_and(|t| records.len() >= t);
        if exhausted {
            break;
        }
    }

    let filtered = filter_records(&records, Orders::SEARCH_FIELDS, params.search_term());
    let bytes = export::workbook_bytes(Orders::ENTITY, Orders::EXPORT_COLUMNS, &filtered)
        .map_err(|e| AppError::InternalError(format!("Spreadsheet build failed: {e}")))?;

    tracing::info!(rows = filtered.len(), "Order export generated");

    Ok(listing::spreadsheet_response(Orders::PATHS.base(), bytes))
}

/// PUT /api/v1/orders/{id}/status
pub async fn update_status(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> AppResult<Json<DataResponse<Value>>> {
    let payload = serde_json::json!({"status": update.status});

    let body = state
        .upstream
        .update(&Orders::PATHS.update(&id), &payload, &session.token)
        .await?;

    let record = listing::refetch_after_mutation::<Orders>(&state, body).await?;
    tracing::info!(id = %id, status = ?update.status, "Order status updated");

    Ok(Json(DataResponse { data: record }))
}
