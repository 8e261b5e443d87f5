use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use biosphere_common::BiosphereError;
use tracing::error;

/// JSON error response for the API routes.
pub struct ApiError(pub BiosphereError);

impl From<BiosphereError> for ApiError {
    fn from(err: BiosphereError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            BiosphereError::DataUnavailable(missing) => (
                StatusCode::SERVICE_UNAVAILABLE,
                serde_json::json!({
                    "error": "live indicators unavailable, no score computed",
                    "unavailable": missing,
                }),
            ),
            BiosphereError::InvalidConfiguration(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            BiosphereError::InvalidThreatLevel(_) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": self.0.to_string() }))
            }
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({ "error": other.to_string() }))
            }
        };

        (status, Json(body)).into_response()
    }
}
