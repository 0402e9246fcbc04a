//! Mock weather provider
//!
//! Fixed-table stand-in for the live provider, used in test mode and by
//! the integration tests. Values are deterministic; unit conversion is
//! always applied from the stored metric canonical values.

use async_trait::async_trait;

use crate::error::{Result, WeatherError};
use crate::provider::{RawCondition, RawCoord, RawMain, RawSys, RawWeather, RawWind, WeatherProvider};
use crate::weather::Units;

// Fixed sun times shared by every mock city (UTC epoch seconds)
const MOCK_SUNRISE: i64 = 1_726_200_000;
const MOCK_SUNSET: i64 = 1_726_245_600;

// == Mock City ==
/// One row of the fixed weather table, in metric units.
struct MockCity {
    key: &'static str,
    name: &'static str,
    country: &'static str,
    lat: f64,
    lon: f64,
    temp_c: f64,
    description: &'static str,
    humidity: u8,
    wind_ms: f64,
    icon: &'static str,
}

const MOCK_CITIES: &[MockCity] = &[
    MockCity { key: "london", name: "London", country: "GB", lat: 51.51, lon: -0.13, temp_c: 18.0, description: "partly cloudy", humidity: 65, wind_ms: 12.0, icon: "02d" },
    MockCity { key: "tokyo", name: "Tokyo", country: "JP", lat: 35.69, lon: 139.69, temp_c: 25.0, description: "sunny", humidity: 58, wind_ms: 8.0, icon: "01d" },
    MockCity { key: "new york", name: "New York", country: "US", lat: 40.71, lon: -74.01, temp_c: 22.0, description: "light rain", humidity: 78, wind_ms: 15.0, icon: "10d" },
    MockCity { key: "paris", name: "Paris", country: "FR", lat: 48.86, lon: 2.35, temp_c: 16.0, description: "overcast", humidity: 72, wind_ms: 10.0, icon: "04d" },
    MockCity { key: "sydney", name: "Sydney", country: "AU", lat: -33.87, lon: 151.21, temp_c: 28.0, description: "clear sky", humidity: 55, wind_ms: 18.0, icon: "01d" },
    MockCity { key: "mumbai", name: "Mumbai", country: "IN", lat: 19.08, lon: 72.88, temp_c: 32.0, description: "thunderstorm", humidity: 85, wind_ms: 22.0, icon: "11d" },
    MockCity { key: "berlin", name: "Berlin", country: "DE", lat: 52.52, lon: 13.41, temp_c: 14.0, description: "light snow", humidity: 68, wind_ms: 14.0, icon: "13d" },
    MockCity { key: "moscow", name: "Moscow", country: "RU", lat: 55.76, lon: 37.62, temp_c: -5.0, description: "heavy snow", humidity: 82, wind_ms: 25.0, icon: "13d" },
];

// == Mock Provider ==
/// Deterministic [`WeatherProvider`] backed by the fixed city table.
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    /// City names available in the fixed table.
    pub fn available_cities() -> Vec<&'static str> {
        MOCK_CITIES.iter().map(|c| c.key).collect()
    }

    /// Converts a canonical Celsius temperature to the requested units.
    fn convert_temp(celsius: f64, units: Units) -> f64 {
        match units {
            Units::Metric => celsius,
            Units::Imperial => celsius * 9.0 / 5.0 + 32.0,
            Units::Kelvin => celsius + 273.15,
        }
    }

    /// Converts a canonical m/s wind speed to the requested units.
    fn convert_wind(ms: f64, units: Units) -> f64 {
        match units {
            Units::Imperial => ms * 2.237,
            _ => ms,
        }
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch_current(&self, city: &str, units: Units) -> Result<RawWeather> {
        let key = city.trim().to_lowercase();
        let row = MOCK_CITIES
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        let temp = Self::convert_temp(row.temp_c, units);

        Ok(RawWeather {
            name: row.name.to_string(),
            coord: RawCoord { lat: row.lat, lon: row.lon },
            main: RawMain {
                temp,
                feels_like: Self::convert_temp(row.temp_c - 1.0, units),
                temp_min: Self::convert_temp(row.temp_c - 2.0, units),
                temp_max: Self::convert_temp(row.temp_c + 2.0, units),
                humidity: row.humidity,
                pressure: 1013,
            },
            weather: vec![RawCondition {
                description: row.description.to_string(),
                icon: row.icon.to_string(),
            }],
            wind: Some(RawWind {
                speed: Some(Self::convert_wind(row.wind_ms, units)),
                deg: Some(180.0),
            }),
            visibility: Some(10_000.0),
            // The current-weather payload carries no UV index; the
            // normalizer turns this into the sentinel
            uvi: None,
            sys: RawSys {
                country: Some(row.country.to_string()),
                sunrise: MOCK_SUNRISE,
                sunset: MOCK_SUNSET,
            },
        })
    }

    fn name(&self) -> &'static str {
        "MockWeather"
    }
}
