//! Route definitions for the order screens.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{listing, orders};
use crate::resources::Orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /              -> orders::list_orders (server-side pagination)
/// GET    /export        -> orders::export_orders (walks all upstream pages)
/// GET    /{id}          -> listing::get_one
/// DELETE /{id}          -> listing::remove
/// PUT    /{id}/status   -> orders::update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders))
        .route("/export", get(orders::export_orders))
        .route(
            "/{id}",
            get(listing::get_one::<Orders>).delete(listing::remove::<Orders>),
        )
        .route("/{id}/status", put(orders::update_status))
}
