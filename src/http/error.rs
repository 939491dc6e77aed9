//! Client-facing error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::upstream::WeatherResource;

/// The four ways a lookup can fail, each mapped 1:1 to an HTTP status and
/// a fixed message.
///
/// Operator-facing detail (upstream status, transport cause) is logged at
/// the point of failure and never carried here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProxyError {
    /// The city query parameter is absent or blank.
    #[error("City parameter is required")]
    MissingParameter,

    /// No provider credential is configured for this process.
    #[error("API key not configured")]
    MissingCredential,

    /// The provider does not know the requested city.
    #[error("City not found")]
    NotFound,

    /// Any other upstream fault: bad status, transport error, bad body.
    #[error("{}", .0.failure_message())]
    UpstreamFailure(WeatherResource),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParameter => StatusCode::BAD_REQUEST,
            ProxyError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::NotFound => StatusCode::NOT_FOUND,
            ProxyError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(err: ProxyError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let json = serde_json::from_slice(&bytes).expect("body must be JSON");
        (status, json)
    }

    #[tokio::test]
    async fn test_missing_parameter_response() {
        let (status, body) = response_parts(ProxyError::MissingParameter).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "City parameter is required"}));
    }

    #[tokio::test]
    async fn test_missing_credential_response() {
        let (status, body) = response_parts(ProxyError::MissingCredential).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "API key not configured"}));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, body) = response_parts(ProxyError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "City not found"}));
    }

    #[tokio::test]
    async fn test_upstream_failure_message_varies_by_resource() {
        let (status, body) =
            response_parts(ProxyError::UpstreamFailure(WeatherResource::CurrentWeather)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch weather data"}));

        let (_, body) =
            response_parts(ProxyError::UpstreamFailure(WeatherResource::Forecast)).await;
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch forecast data"}));
    }
}
