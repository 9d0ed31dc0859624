//! Route definitions for adverts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::advert;
use crate::state::AppState;

/// Advert routes. Paths keep their trailing slash.
///
/// ```text
/// POST   /advert/        -> create_advert
/// GET    /advert/{id}/   -> get_advert
/// DELETE /advert/{id}/   -> delete_advert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advert/", post(advert::create_advert))
        .route(
            "/advert/{id}/",
            get(advert::get_advert).delete(advert::delete_advert),
        )
}
