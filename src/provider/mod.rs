//! Provider Module
//!
//! Abstracts the upstream weather data source behind a single-method
//! capability. The weather service is written against the trait only;
//! the live OpenWeatherMap client and the fixed-table mock both
//! implement it.

mod mock;
mod openweather;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::weather::Units;

pub use mock::MockProvider;
pub use openweather::OpenWeatherProvider;

// == Provider Capability ==
/// Capability contract for fetching current weather for a named city.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the raw current-weather payload for a city, with
    /// temperature-bearing fields already in the requested unit system.
    async fn fetch_current(&self, city: &str, units: Units) -> Result<RawWeather>;

    /// Human-readable provider name, surfaced as the `source` field.
    fn name(&self) -> &'static str;
}

// == Raw Payload ==
/// Strict mapping of the provider's current-weather payload.
///
/// Fields the provider may omit are `Option`s here; normalization turns
/// them into explicit sentinels so the loose upstream shape never leaks
/// past this boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeather {
    /// Resolved city name
    pub name: String,
    pub coord: RawCoord,
    pub main: RawMain,
    /// Weather condition list; the first element drives description/icon
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    #[serde(default)]
    pub wind: Option<RawWind>,
    /// Visibility in meters, not always reported
    #[serde(default)]
    pub visibility: Option<f64>,
    /// UV index, absent from the current-weather endpoint
    #[serde(default)]
    pub uvi: Option<f64>,
    pub sys: RawSys,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct RawWind {
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    /// ISO country code, e.g. "GB"
    #[serde(default)]
    pub country: Option<String>,
    /// Sunrise as Unix epoch seconds (UTC)
    pub sunrise: i64,
    /// Sunset as Unix epoch seconds (UTC)
    pub sunset: i64,
}
