//! Raw payload normalization
//!
//! Converts the provider's loose payload shape into the canonical
//! [`NormalizedWeather`] contract: sentinels for absent fields, rounded
//! temperatures, title-cased description, epoch sun times as ISO-8601.

use chrono::{DateTime, Utc};

use crate::provider::RawWeather;
use crate::weather::types::{
    Coordinates, CurrentConditions, NormalizedWeather, Reading, SunTimes, UnitLabels, Units,
};

/// Builds the canonical weather value from a raw provider payload.
///
/// Temperature-bearing fields arrive already in the requested unit
/// system (the provider call passes the units through), so no conversion
/// happens here; the `units` block is labelled to match the request.
/// `cached` starts out `false`; the service flips it on copies served
/// from the cache.
pub fn normalize(raw: RawWeather, units: Units, source: &str) -> NormalizedWeather {
    let (description, icon) = raw
        .weather
        .first()
        .map(|c| (title_case(&c.description), c.icon.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

    let wind = raw.wind.unwrap_or_default();

    NormalizedWeather {
        city: display_city(&raw.name, raw.sys.country.as_deref()),
        coordinates: Coordinates {
            lat: raw.coord.lat,
            lon: raw.coord.lon,
        },
        current: CurrentConditions {
            temperature: round1(raw.main.temp),
            feels_like: round1(raw.main.feels_like),
            temp_min: round1(raw.main.temp_min),
            temp_max: round1(raw.main.temp_max),
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            description,
            icon,
            wind_speed: wind.speed.unwrap_or(0.0),
            wind_direction: wind.deg.unwrap_or(0.0),
            visibility: Reading::from(raw.visibility),
            uv_index: Reading::from(raw.uvi),
        },
        units: UnitLabels::from(units),
        sun: SunTimes {
            sunrise: format_epoch(raw.sys.sunrise),
            sunset: format_epoch(raw.sys.sunset),
        },
        timestamp: Utc::now().to_rfc3339(),
        source: source.to_string(),
        cached: false,
    }
}

/// Rounds to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// "<name>, <country>" when a country code is available, else the name.
fn display_city(name: &str, country: Option<&str>) -> String {
    match country {
        Some(code) if !code.is_empty() => format!("{}, {}", name, code),
        _ => name.to_string(),
    }
}

/// Uppercases the first letter of every whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts Unix epoch seconds to an ISO-8601 UTC timestamp.
fn format_epoch(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| Reading::SENTINEL.to_string())
}
