//! Handlers for the advert resource.
//!
//! Each handler performs one repository call. Validation happens before
//! the store is touched; store outcomes are translated into [`AppError`]
//! kinds here so the router only ever sees a response or an error.

use adboard_core::advert::{self, CreateAdvert};
use adboard_core::error::CoreError;
use adboard_core::types::{DbId, Timestamp};
use adboard_db::models::advert::Advert;
use adboard_db::repositories::AdvertRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Body of `GET /advert/{id}/`.
#[derive(Debug, Serialize)]
pub struct AdvertSummary {
    pub title: String,
    pub owner: String,
    /// `creation_time`, as RFC 3339.
    pub date: Timestamp,
}

impl From<Advert> for AdvertSummary {
    fn from(advert: Advert) -> Self {
        Self {
            title: advert.title,
            owner: advert.owner,
            date: advert.creation_time,
        }
    }
}

/// Body of `POST /advert/`: the full stored record.
#[derive(Debug, Serialize)]
pub struct AdvertRecord {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub owner: String,
    /// Unix seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub creation_time: Timestamp,
}

impl From<Advert> for AdvertRecord {
    fn from(advert: Advert) -> Self {
        Self {
            id: advert.id,
            title: advert.title,
            description: advert.description,
            owner: advert.owner,
            creation_time: advert.creation_time,
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: advert::ENTITY,
        id,
    })
}

/// Parse the `{id}` path segment. Only plain decimal digits can name an
/// advert; signs, whitespace and overflow are rejected.
fn parse_advert_id(raw: &str) -> AppResult<DbId> {
    let invalid = || AppError::InvalidId {
        entity: advert::ENTITY,
        raw: raw.to_string(),
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /advert/{id}/
pub async fn get_advert(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_advert_id(&raw_id)?;

    let found = AdvertRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(AdvertSummary::from(found)))
}

/// POST /advert/
///
/// Validates the body, then inserts. A store constraint violation is
/// reported as a conflict.
pub async fn create_advert(
    State(state): State<AppState>,
    payload: Result<Json<CreateAdvert>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let input = advert::validate_create(payload)?;

    let created = AdvertRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            if adboard_db::is_integrity_violation(&err) {
                tracing::warn!(error = %err, owner = %input.owner, "Advert insert conflicted");
                AppError::Core(CoreError::Conflict {
                    entity: advert::ENTITY,
                })
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(
        advert_id = created.id,
        owner = %created.owner,
        "Advert created",
    );

    Ok(Json(AdvertRecord::from(created)))
}

/// DELETE /advert/{id}/
pub async fn delete_advert(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_advert_id(&raw_id)?;

    let deleted = AdvertRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(advert_id = id, "Advert deleted");

    Ok(Json(StatusResponse { status: "success" }))
}
