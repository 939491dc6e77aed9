//! Upstream resource identifiers and error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// The two provider resources the proxy forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherResource {
    /// Current conditions for a city.
    CurrentWeather,
    /// 5-day / 3-hour forecast for a city.
    Forecast,
}

impl WeatherResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherResource::CurrentWeather => "current-weather",
            WeatherResource::Forecast => "forecast",
        }
    }

    /// Path of this resource on the provider API, relative to the base URL.
    pub fn api_path(&self) -> &'static str {
        match self {
            WeatherResource::CurrentWeather => "/weather",
            WeatherResource::Forecast => "/forecast",
        }
    }

    /// Client-facing message when a lookup against this resource fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            WeatherResource::CurrentWeather => "Failed to fetch weather data",
            WeatherResource::Forecast => "Failed to fetch forecast data",
        }
    }
}

impl std::fmt::Display for WeatherResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while fetching from the provider.
///
/// Only `CityNotFound` is a recognized, non-fatal condition; every other
/// variant is normalized to a generic failure at the HTTP boundary.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Provider answered 404 for the requested city.
    #[error("city not found upstream")]
    CityNotFound,

    /// Provider answered with a non-success status other than 404.
    #[error("upstream responded with status {0}")]
    BadStatus(StatusCode),

    /// The outbound call failed at the transport layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider returned a 2xx body that is not valid JSON.
    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_api_paths() {
        assert_eq!(WeatherResource::CurrentWeather.api_path(), "/weather");
        assert_eq!(WeatherResource::Forecast.api_path(), "/forecast");
    }

    #[test]
    fn test_resource_failure_messages() {
        assert_eq!(
            WeatherResource::CurrentWeather.failure_message(),
            "Failed to fetch weather data"
        );
        assert_eq!(
            WeatherResource::Forecast.failure_message(),
            "Failed to fetch forecast data"
        );
    }

    #[test]
    fn test_bad_status_message_carries_status_for_logs() {
        let err = UpstreamError::BadStatus(StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "upstream responded with status 401 Unauthorized");
    }
}
