//! OpenWeatherMap client
//!
//! Live implementation of [`WeatherProvider`] backed by the
//! OpenWeatherMap current-weather endpoint. Translates every transport
//! and status failure into a [`WeatherError`] kind at this boundary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{error, info, warn};

use crate::config::OPENWEATHERMAP_BASE_URL;
use crate::error::{Result, RetryHint, WeatherError};
use crate::provider::{RawWeather, WeatherProvider};
use crate::weather::Units;

// == OpenWeather Provider ==
/// HTTP client for the OpenWeatherMap current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherProvider {
    // == Constructor ==
    /// Creates a new provider with the given credential and request timeout.
    ///
    /// A missing credential is tolerated at construction (the server can
    /// still start); fetches will fail with `Unauthorized` until one is
    /// configured.
    pub fn new(api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        if api_key.is_none() {
            warn!("OpenWeatherMap API key not configured");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| WeatherError::Internal(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: OPENWEATHERMAP_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Overrides the API base URL. Used by tests to point at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parses the Retry-After header of a 429 response, if present.
    fn retry_hint(response: &reqwest::Response) -> RetryHint {
        RetryHint(
            response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str, units: Units) -> Result<RawWeather> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::Unauthorized)?;

        let url = format!("{}/weather", self.base_url);
        info!("fetching weather data for {}", city);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", units.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("timeout fetching weather for {}", city);
                    WeatherError::Timeout
                } else {
                    error!("connection error fetching weather for {}: {}", city, e);
                    WeatherError::Unavailable
                }
            })?;

        match response.status() {
            StatusCode::OK => response.json::<RawWeather>().await.map_err(|e| {
                error!("malformed provider payload for {}: {}", city, e);
                WeatherError::Unavailable
            }),
            StatusCode::NOT_FOUND => Err(WeatherError::NotFound(city.to_string())),
            StatusCode::UNAUTHORIZED => {
                error!("provider rejected API key");
                Err(WeatherError::Unauthorized)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("provider rate limit hit");
                Err(WeatherError::RateLimited(Self::retry_hint(&response)))
            }
            status => {
                error!("provider request failed with status {}", status);
                Err(WeatherError::Unavailable)
            }
        }
    }

    fn name(&self) -> &'static str {
        "OpenWeatherMap"
    }
}
