pub mod auth;
pub mod blogs;
pub mod categories;
pub mod contacts;
pub mod coupons;
pub mod health;
pub mod orders;
pub mod pincodes;
pub mod products;
pub mod subcategories;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                   login (public)
/// /auth/verify                  guard state for the presented token
/// /auth/logout                  logout acknowledgement
///
/// /categories                   list, create
/// /categories/export            xlsx download of the filtered list
/// /categories/{id}              get, update, delete
///
/// /subcategories                (same shape as categories)
/// /products                     (same shape, multi-image form)
/// /coupons                      (same shape, JSON form)
/// /blogs                        (same shape, cover-image form)
/// /pincodes                     (same shape, JSON form)
///
/// /contacts                     list, export, get, delete (no form)
/// /users                        list, export, get, delete (no form)
///
/// /orders                       list (server-side pagination)
/// /orders/export                xlsx download
/// /orders/{id}                  get, delete
/// /orders/{id}/status           status update (PUT)
/// ```
///
/// Everything except `/auth/login` and `/auth/verify` requires a verified
/// admin bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/categories", categories::router())
        .nest("/subcategories", subcategories::router())
        .nest("/products", products::router())
        .nest("/coupons", coupons::router())
        .nest("/blogs", blogs::router())
        .nest("/contacts", contacts::router())
        .nest("/orders", orders::router())
        .nest("/users", users::router())
        .nest("/pincodes", pincodes::router())
}
