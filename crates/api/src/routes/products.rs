//! Route definitions for the product screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::{listing, products};
use crate::resources::Products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /            -> listing::list
/// POST   /            -> products::create (multipart, up to 4 images)
/// GET    /export      -> listing::export
/// GET    /{id}        -> listing::get_one
/// PUT    /{id}        -> products::update (multipart)
/// DELETE /{id}        -> listing::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list::<Products>).post(products::create))
        .route("/export", get(listing::export::<Products>))
        .route(
            "/{id}",
            get(listing::get_one::<Products>)
                .put(products::update)
                .delete(listing::remove::<Products>),
        )
}
