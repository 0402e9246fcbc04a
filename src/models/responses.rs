//! Response DTOs for the weather API
//!
//! Defines the structure of outgoing HTTP response bodies. Successful
//! payloads are wrapped in a `{status: "success", data: ...}` envelope;
//! errors use `{status: "error", message: ...}` (see `error.rs`).

use serde::Serialize;

use crate::cache::CacheStats;
use crate::weather::NormalizedWeather;

/// Success envelope for weather responses
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    /// Always "success"
    pub status: String,
    /// The normalized weather payload
    pub data: NormalizedWeather,
}

impl WeatherResponse {
    /// Wraps a normalized weather value in the success envelope.
    pub fn new(data: NormalizedWeather) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Service identifier
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Whether the server is running against the mock provider
    pub test_mode: bool,
}

impl HealthResponse {
    /// Creates a new HealthResponse with the current timestamp.
    pub fn healthy(test_mode: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            service: "weather-dashboard".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            test_mode,
        }
    }
}

/// Response body for the cache stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Always "success"
    pub status: String,
    /// Occupancy snapshot of the cache
    pub stats: CacheStats,
}

impl StatsResponse {
    pub fn new(stats: CacheStats) -> Self {
        Self {
            status: "success".to_string(),
            stats,
        }
    }
}

/// Response body for the test-cities endpoint (GET /api/test/cities)
#[derive(Debug, Clone, Serialize)]
pub struct TestCitiesResponse {
    pub status: String,
    pub cities: Vec<&'static str>,
    pub message: String,
}

impl TestCitiesResponse {
    pub fn new(cities: Vec<&'static str>) -> Self {
        Self {
            status: "success".to_string(),
            cities,
            message: "Available test cities".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(true);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("weather-dashboard"));
        assert!(json.contains("\"test_mode\":true"));
    }

    #[test]
    fn test_stats_response_serialize() {
        let resp = StatsResponse::new(CacheStats::default());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("total_entries"));
    }

    #[test]
    fn test_test_cities_response_serialize() {
        let resp = TestCitiesResponse::new(vec!["london", "tokyo"]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("london"));
        assert!(json.contains("Available test cities"));
    }
}
