//! Query precondition checks.
//!
//! Pure functions, evaluated before any outbound call is made. A request
//! that fails here never reaches the provider.

use serde::Deserialize;

use crate::config::ApiKey;
use crate::http::error::ProxyError;

/// Query string accepted by both lookup endpoints.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    /// Free-text city name.
    pub city: Option<String>,
}

/// Validate a lookup request against the process configuration.
///
/// Returns the trimmed city and the credential to forward with, or the
/// error the client should see. Both endpoints share this single policy:
/// the credential is required, with no fallback value.
pub fn validate_query<'a>(
    params: &WeatherParams,
    credential: Option<&'a ApiKey>,
) -> Result<(String, &'a ApiKey), ProxyError> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if city.is_empty() {
        return Err(ProxyError::MissingParameter);
    }

    let credential = credential.ok_or(ProxyError::MissingCredential)?;

    Ok((city.to_string(), credential))
}
