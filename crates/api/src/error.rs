use adboard_core::advert;
use adboard_core::error::CoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

/// Message returned in place of any internal failure detail.
const INTERNAL_MESSAGE: &str = "internal_error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "message": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `adboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path id that is not a plain decimal integer; no row can match it.
    #[error("Invalid {entity} id: {raw}")]
    InvalidId { entity: &'static str, raw: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(core) => core_response(core),

            AppError::Database(err) => match classify_sqlx_error(&err) {
                Some(core) => core_response(core),
                None => {
                    tracing::error!(error = %err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Value::String(INTERNAL_MESSAGE.to_string()),
                    )
                }
            },

            AppError::InvalidId { entity, raw } => {
                tracing::debug!(entity, raw = %raw, "Rejected non-integer id");
                (
                    StatusCode::NOT_FOUND,
                    Value::String(format!("{entity}_not_found")),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Value::String(msg)),
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}

fn core_response(core: CoreError) -> (StatusCode, Value) {
    match core {
        CoreError::NotFound { entity, .. } => (
            StatusCode::NOT_FOUND,
            Value::String(format!("{entity}_not_found")),
        ),
        CoreError::Validation(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
        CoreError::Conflict { entity } => (
            StatusCode::CONFLICT,
            Value::String(format!("{entity}_conflict")),
        ),
    }
}

/// Map a raw sqlx error onto a domain error where one applies.
///
/// - `RowNotFound` becomes an advert `NotFound`.
/// - Integrity constraint violations (SQLSTATE class 23) become an advert
///   `Conflict`.
/// - Anything else has no domain meaning and is answered with a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> Option<CoreError> {
    match err {
        sqlx::Error::RowNotFound => Some(CoreError::NotFound {
            entity: advert::ENTITY,
            id: 0,
        }),
        err if adboard_db::is_integrity_violation(err) => {
            tracing::warn!(error = %err, "Constraint violation");
            Some(CoreError::Conflict {
                entity: advert::ENTITY,
            })
        }
        _ => None,
    }
}
