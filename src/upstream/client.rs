//! Outbound client for the weather provider.

use axum::body::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::IgnoredAny;

use crate::config::{ApiKey, UpstreamConfig};
use crate::upstream::types::{UpstreamError, WeatherResource};

/// Client for the provider's REST API.
///
/// Holds a connection-pooled `reqwest::Client` plus the configured base URL
/// and unit system. One instance is shared by all request handlers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    units: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            units: config.units.clone(),
        }
    }

    /// Fetch one resource for a city, returning the provider's JSON body
    /// verbatim.
    ///
    /// The body is checked to be syntactically valid JSON but is never
    /// deserialized into a typed model, so provider-side field additions
    /// survive the proxy untouched.
    pub async fn fetch(
        &self,
        resource: WeatherResource,
        city: &str,
        credential: &ApiKey,
    ) -> Result<Bytes, UpstreamError> {
        let url = format!("{}{}", self.base_url, resource.api_path());

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.as_str()),
                ("appid", credential.expose()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::CityNotFound);
        }
        if !status.is_success() {
            return Err(UpstreamError::BadStatus(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)?;

        Ok(body)
    }
}
