//! JSON handlers for dashboard strategies.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use roomboard_domain::lovelace::LovelaceConfig;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for running a strategy.
///
/// Both fields default to an empty object.
#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "empty_object")]
    pub config: Value,
    #[serde(default = "empty_object")]
    pub hass: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<&'static str>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the generate endpoint.
pub enum GenerateResponse {
    Ok(Json<LovelaceConfig>),
}

impl IntoResponse for GenerateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/strategies`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.registry.names()))
}

/// `POST /api/strategies/{name}/generate`
pub async fn generate(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<GenerateRequest>,
) -> Result<GenerateResponse, ApiError> {
    let lovelace = state.registry.generate(&name, &req.config, &req.hass)?;
    Ok(GenerateResponse::Ok(Json(lovelace)))
}
