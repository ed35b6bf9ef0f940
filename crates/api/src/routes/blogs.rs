//! Route definitions for the blog screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::{blogs, listing};
use crate::resources::Blogs;
use crate::state::AppState;

/// Routes mounted at `/blogs`. Multipart forms with a cover image.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list::<Blogs>).post(blogs::create))
        .route("/export", get(listing::export::<Blogs>))
        .route(
            "/{id}",
            get(listing::get_one::<Blogs>)
                .put(blogs::update)
                .delete(listing::remove::<Blogs>),
        )
}
