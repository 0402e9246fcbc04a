//! Weather Dashboard Backend
//!
//! Fetches, normalizes and temporarily caches current-weather data from
//! OpenWeatherMap, exposing it over a small JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod tasks;
pub mod weather;

pub use api::AppState;
pub use config::Config;
pub use error::WeatherError;
pub use tasks::spawn_cleanup_task;
pub use weather::{NormalizedWeather, Units, WeatherService};
