//! Generic list/get/delete/export handlers, parameterized by [`Resource`].
//!
//! One implementation serves every table screen: fetch the collection from
//! upstream, normalize, filter, paginate. Mutations follow a single
//! policy -- the local view changes only after the backend confirms, and
//! successful writes re-fetch the stored record so responses always show
//! server state.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use bloomcart_core::error::CoreError;
use bloomcart_core::listing::{filter_records, paginate};
use bloomcart_core::types::ID_FIELD;
use bloomcart_upstream::envelope;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::export;
use crate::middleware::auth::AdminSession;
use crate::query::ListParams;
use crate::resources::Resource;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// GET /{resource}?search=&page=&page_size=
///
/// Fetch the full collection, filter by the search term across the
/// resource's searchable fields, and serve one page.
pub async fn list<R: Resource>(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ListResponse<Value>>> {
    let records = state.upstream.fetch_records(&R::PATHS.list()).await?;

    let filtered = filter_records(&records, R::SEARCH_FIELDS, params.search_term());
    let page = paginate(filtered, params.page(), params.page_size());

    Ok(Json(page.into()))
}

/// GET /{resource}/{id}
pub async fn get_one<R: Resource>(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Value>>> {
    let record = state
        .upstream
        .fetch_record(&R::PATHS.get(&id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id: id.clone(),
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /{resource}/{id}
///
/// Issues the upstream delete and reports 204 only on success; the record
/// never disappears from a client's view before the backend confirms.
pub async fn remove<R: Resource>(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .upstream
        .delete(&R::PATHS.delete(&id), &session.token)
        .await?;

    tracing::info!(entity = R::ENTITY, id = %id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /{resource}/export?search=
///
/// Serialize the filtered (not paginated) collection to an xlsx download.
pub async fn export<R: Resource>(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let records = state.upstream.fetch_records(&R::PATHS.list()).await?;
    let filtered = filter_records(&records, R::SEARCH_FIELDS, params.search_term());

    let bytes = export::workbook_bytes(R::ENTITY, R::EXPORT_COLUMNS, &filtered)
        .map_err(|e| AppError::InternalError(format!("Spreadsheet build failed: {e}")))?;

    tracing::info!(entity = R::ENTITY, rows = filtered.len(), "Export generated");

    Ok(spreadsheet_response(R::PATHS.base(), bytes))
}

/// Wrap workbook bytes as an xlsx attachment download.
pub(crate) fn spreadsheet_response(
    base: &'static str,
    bytes: Vec<u8>,
) -> impl IntoResponse {
    let filename = format!("attachment; filename=\"{base}-export.xlsx\"");
    (
        [
            (header::CONTENT_TYPE, export::XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        bytes,
    )
}

/// Re-fetch a record after a successful create/update so the response
/// reflects what the backend actually stored.
///
/// If the mutation response carries no usable `_id` (or the re-fetch comes
/// back empty), the mutation-response record is returned as a fallback and
/// the anomaly is logged.
pub(crate) async fn refetch_after_mutation<R: Resource>(
    state: &AppState,
    mutation_body: Value,
) -> AppResult<Value> {
    let record = envelope::record(mutation_body);
    let id = record
        .as_ref()
        .and_then(|r| r.get(ID_FIELD))
        .and_then(Value::as_str)
        .map(str::to_owned);

    if let Some(id) = id {
        if let Some(fresh) = state.upstream.fetch_record(&R::PATHS.get(&id)).await? {
            return Ok(fresh);
        }
        tracing::warn!(entity = R::ENTITY, id = %id, "Re-fetch after mutation found nothing");
    } else {
        tracing::warn!(entity = R::ENTITY, "Mutation response carried no record id");
    }

    Ok(record.unwrap_or(Value::Null))
}
