pub mod advert;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service + database health
///
/// /advert/                create (POST)
/// /advert/{id}/           get (GET), delete (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(advert::router())
}
