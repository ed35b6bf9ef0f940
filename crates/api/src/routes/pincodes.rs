//! Route definitions for the serviceable-pincode screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::{listing, pincodes};
use crate::resources::Pincodes;
use crate::state::AppState;

/// Routes mounted at `/pincodes`. JSON forms, no images.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list::<Pincodes>).post(pincodes::create))
        .route("/export", get(listing::export::<Pincodes>))
        .route(
            "/{id}",
            get(listing::get_one::<Pincodes>)
                .put(pincodes::update)
                .delete(listing::remove::<Pincodes>),
        )
}
