//! Lookup endpoint handlers.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::error::ProxyError;
use crate::http::server::AppState;
use crate::http::validation::{validate_query, WeatherParams};
use crate::upstream::{UpstreamError, WeatherResource};

/// `GET /current-weather?city=<name>`
pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Response, ProxyError> {
    lookup(&state, &params, WeatherResource::CurrentWeather).await
}

/// `GET /forecast?city=<name>`
pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Response, ProxyError> {
    lookup(&state, &params, WeatherResource::Forecast).await
}

/// `GET /health` liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// Shared lookup flow for both resources: validate, forward once, map the
/// outcome. The two endpoints differ only in the upstream resource and the
/// failure message that comes with it.
async fn lookup(
    state: &AppState,
    params: &WeatherParams,
    resource: WeatherResource,
) -> Result<Response, ProxyError> {
    let (city, credential) = validate_query(params, state.credential.as_deref())?;

    match state.upstream.fetch(resource, &city, credential).await {
        Ok(body) => {
            tracing::debug!(resource = %resource, city = %city, "Lookup succeeded");
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        Err(UpstreamError::CityNotFound) => {
            tracing::debug!(resource = %resource, city = %city, "City not known upstream");
            Err(ProxyError::NotFound)
        }
        Err(err) => {
            // Operator-facing cause only; the client sees a generic message.
            tracing::error!(resource = %resource, city = %city, error = %err, "Upstream lookup failed");
            Err(ProxyError::UpstreamFailure(resource))
        }
    }
}
