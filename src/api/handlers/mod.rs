use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use super::AppState;
use crate::models::*;
use crate::session::ConfigReport;
use crate::WsjfError;

// ============================================================
// Error Handling
// ============================================================

/// Errors returned by the HTTP handlers.
///
/// Validation failures are safe to show the client and come back as
/// `400 Bad Request` with the message. Anything else is logged server-side
/// and the client only sees a generic message. Malformed bodies, including
/// numbers too large for their field, are also reported as `400`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] WsjfError),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            Self::Body(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Initiatives
// ============================================================

pub async fn list_initiatives(
    State(state): State<AppState>,
) -> Result<Json<Vec<Initiative>>, ApiError> {
    Ok(Json(state.lock()?.initiatives()))
}

pub async fn create_initiative(
    State(state): State<AppState>,
    payload: Result<Json<CreateInitiativeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Initiative>), ApiError> {
    let Json(input) = payload?;
    let initiative = state.lock()?.add_initiative(input)?;
    Ok((StatusCode::CREATED, Json(initiative)))
}

/// Removing an unknown id is not an error. An id that is not a UUID cannot
/// be stored, so it is treated as unknown.
pub async fn delete_initiative(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match Uuid::parse_str(&id) {
        Ok(id) => {
            state.lock()?.remove_initiative(id);
        }
        Err(_) => tracing::debug!(%id, "Ignoring delete for non-UUID id"),
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Ranking
// ============================================================

pub async fn list_ranked(
    State(state): State<AppState>,
) -> Result<Json<Vec<RankedInitiative>>, ApiError> {
    Ok(Json(state.lock()?.get_ranked()))
}

// ============================================================
// Weights
// ============================================================

#[derive(Debug, Deserialize)]
pub struct SetWeightInput {
    pub value: u8,
}

pub async fn get_weights(State(state): State<AppState>) -> Result<Json<WeightVector>, ApiError> {
    Ok(Json(state.lock()?.weights()))
}

pub async fn replace_weights(
    State(state): State<AppState>,
    payload: Result<Json<WeightVector>, JsonRejection>,
) -> Result<Json<WeightVector>, ApiError> {
    let Json(weights) = payload?;
    let mut session = state.lock()?;
    session.set_weights(weights)?;
    Ok(Json(session.weights()))
}

pub async fn set_weight(
    State(state): State<AppState>,
    Path(factor): Path<String>,
    payload: Result<Json<SetWeightInput>, JsonRejection>,
) -> Result<Json<WeightVector>, ApiError> {
    let Json(input) = payload?;
    let factor: Factor = factor.parse()?;
    let mut session = state.lock()?;
    session.set_weight(factor, input.value)?;
    Ok(Json(session.weights()))
}

// ============================================================
// Diagnostics and metadata
// ============================================================

pub async fn get_config(State(state): State<AppState>) -> Result<Json<ConfigReport>, ApiError> {
    let report = state.lock()?.config_report();
    tracing::info!(
        storage_mode = %report.storage_mode,
        data_count = report.data_count,
        "Configuration test"
    );
    Ok(Json(report))
}

pub async fn list_factors() -> Json<FactorCatalogue> {
    Json(FactorCatalogue::build())
}
