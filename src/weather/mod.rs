//! Weather Module
//!
//! Canonical data contracts, payload normalization and the cache-mediated
//! weather service.

pub mod normalize;
mod service;
mod types;

pub use service::WeatherService;
pub use types::{
    Coordinates, CurrentConditions, NormalizedWeather, Reading, SunTimes, UnitLabels, Units,
};
