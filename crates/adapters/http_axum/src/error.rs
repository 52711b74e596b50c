//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomboard_domain::error::RoomboardError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RoomboardError`] to an HTTP response with appropriate status code.
pub struct ApiError(RoomboardError);

impl From<RoomboardError> for ApiError {
    fn from(err: RoomboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RoomboardError::Input(err) => {
                tracing::warn!(error = %err, "rejected host input");
                StatusCode::BAD_REQUEST
            }
            RoomboardError::UnknownStrategy(_) => StatusCode::NOT_FOUND,
        };

        let message = error_chain(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
