//! API Handlers
//!
//! HTTP request handlers for each weather API endpoint. The route layer
//! owns request parsing and validation; everything past that is delegated
//! to the weather service.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::models::{
    HealthResponse, StatsResponse, TestCitiesResponse, UnitsQuery, WeatherRequest, WeatherResponse,
};
use crate::provider::{MockProvider, OpenWeatherProvider, WeatherProvider};
use crate::weather::{NormalizedWeather, Units, WeatherService};

/// Application state shared across all handlers.
///
/// The cache store is the only shared mutable resource; it is wrapped in
/// `Arc<RwLock<>>` and passed explicitly into the weather service.
#[derive(Clone)]
pub struct AppState {
    /// Cache-mediated weather lookup
    pub service: WeatherService,
    /// Thread-safe weather cache (also read directly by the stats endpoint)
    pub cache: Arc<RwLock<CacheStore<NormalizedWeather>>>,
    /// Whether the mock provider is active
    pub test_mode: bool,
}

impl AppState {
    /// Creates a new AppState over an explicit provider.
    pub fn new(provider: Arc<dyn WeatherProvider>, cache_ttl: u64, test_mode: bool) -> Self {
        let cache = Arc::new(RwLock::new(CacheStore::new()));
        Self {
            service: WeatherService::new(cache.clone(), provider, cache_ttl),
            cache,
            test_mode,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Selects the mock provider in test mode, the live OpenWeatherMap
    /// client otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider: Arc<dyn WeatherProvider> = if config.test_mode {
            Arc::new(MockProvider::new())
        } else {
            Arc::new(OpenWeatherProvider::new(
                config.api_key.clone(),
                config.request_timeout,
            )?)
        };

        Ok(Self::new(provider, config.cache_ttl, config.test_mode))
    }
}

/// Handler for POST /api/weather
///
/// Looks up current weather for the requested city, serving from the
/// cache when fresh.
pub async fn weather_handler(
    State(state): State<AppState>,
    Json(req): Json<WeatherRequest>,
) -> Result<Json<WeatherResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(WeatherError::InvalidInput(error_msg));
    }

    let units = Units::parse(req.units.as_deref()).map_err(WeatherError::InvalidInput)?;
    let weather = state.service.get_weather(&req.city, units).await?;

    Ok(Json(WeatherResponse::new(weather)))
}

/// Handler for GET /api/weather/:city
///
/// Returns cached data only; never triggers an upstream fetch.
pub async fn cached_weather_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(query): Query<UnitsQuery>,
) -> Result<Json<WeatherResponse>> {
    let units = Units::parse(query.units.as_deref()).map_err(WeatherError::InvalidInput)?;

    match state.service.cached_weather(&city, units).await {
        Some(weather) => Ok(Json(WeatherResponse::new(weather))),
        None => Err(WeatherError::NotFound(city)),
    }
}

/// Handler for GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.test_mode))
}

/// Handler for GET /api/cache/stats
///
/// Reports a consistent occupancy snapshot of the weather cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::new(stats))
}

/// Handler for GET /api/test/cities
///
/// Lists the cities available from the mock provider. Only answers in
/// test mode.
pub async fn test_cities_handler(State(state): State<AppState>) -> Response {
    if !state.test_mode {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "status": "error",
                "message": "Test endpoints are only available in test mode",
            })),
        )
            .into_response();
    }

    Json(TestCitiesResponse::new(MockProvider::available_cities())).into_response()
}
