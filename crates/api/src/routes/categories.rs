//! Route definitions for the category screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, listing};
use crate::resources::Categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /            -> listing::list
/// POST   /            -> categories::create (multipart)
/// GET    /export      -> listing::export
/// GET    /{id}        -> listing::get_one
/// PUT    /{id}        -> categories::update (multipart)
/// DELETE /{id}        -> listing::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(listing::list::<Categories>).post(categories::create),
        )
        .route("/export", get(listing::export::<Categories>))
        .route(
            "/{id}",
            get(listing::get_one::<Categories>)
                .put(categories::update)
                .delete(listing::remove::<Categories>),
        )
}
