//! Route definitions for the customer-user screens.
//!
//! Accounts are created by customers on the storefront; the dashboard
//! only reads and deletes them.

use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::resources::Users;
use crate::state::AppState;

/// Routes mounted at `/users`. Read and delete only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list::<Users>))
        .route("/export", get(listing::export::<Users>))
        .route(
            "/{id}",
            get(listing::get_one::<Users>).delete(listing::remove::<Users>),
        )
}
