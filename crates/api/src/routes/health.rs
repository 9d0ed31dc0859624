//! Store readiness for load balancers and operators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    /// `ok` when adverts can be served, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// A connection could be checked out and answered a query.
    pub database: bool,
    /// The `adverts` table exists and is readable.
    pub adverts_table: bool,
}

/// GET /health
///
/// 200 when the advert store is usable, 503 otherwise. Failures are logged,
/// never returned.
async fn store_health(State(state): State<AppState>) -> (StatusCode, Json<StoreHealth>) {
    let database = match adboard_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database unreachable");
            false
        }
    };

    let adverts_table = database
        && match adboard_db::check_adverts_table(&state.pool).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Adverts table unavailable");
                false
            }
        };

    let (code, status) = if adverts_table {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(StoreHealth {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
            adverts_table,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(store_health))
}
