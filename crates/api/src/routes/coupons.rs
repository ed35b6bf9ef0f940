//! Route definitions for the coupon screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::{coupons, listing};
use crate::resources::Coupons;
use crate::state::AppState;

/// Routes mounted at `/coupons`. JSON forms, no images.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list::<Coupons>).post(coupons::create))
        .route("/export", get(listing::export::<Coupons>))
        .route(
            "/{id}",
            get(listing::get_one::<Coupons>)
                .put(coupons::update)
                .delete(listing::remove::<Coupons>),
        )
}
