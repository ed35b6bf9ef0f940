//! Route definitions for the subcategory screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::{listing, subcategories};
use crate::resources::Subcategories;
use crate::state::AppState;

/// Routes mounted at `/subcategories`. Same shape as `/categories`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(listing::list::<Subcategories>).post(subcategories::create),
        )
        .route("/export", get(listing::export::<Subcategories>))
        .route(
            "/{id}",
            get(listing::get_one::<Subcategories>)
                .put(subcategories::update)
                .delete(listing::remove::<Subcategories>),
        )
}
