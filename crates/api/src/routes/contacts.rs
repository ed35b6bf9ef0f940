//! Route definitions for the contact-message screens.
//!
//! Contact messages originate from the storefront contact form; the
//! dashboard only reads and deletes them.

use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::resources::Contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /        -> listing::list
/// GET    /export  -> listing::export
/// GET    /{id}    -> listing::get_one
/// DELETE /{id}    -> listing::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list::<Contacts>))
        .route("/export", get(listing::export::<Contacts>))
        .route(
            "/{id}",
            get(listing::get_one::<Contacts>).delete(listing::remove::<Contacts>),
        )
}
