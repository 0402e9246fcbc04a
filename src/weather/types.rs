//! Canonical weather data contracts
//!
//! Defines the unit system, the numeric-or-sentinel reading type, and the
//! normalized output shape shared by the cache, the service, and the API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// == Unit System ==
/// Temperature/wind unit preference, passed through to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Kelvin,
}

impl Units {
    /// Parses an optional caller-supplied unit token.
    ///
    /// Absent input defaults to metric; an unknown token is a caller error.
    pub fn parse(value: Option<&str>) -> Result<Self, String> {
        match value {
            None => Ok(Self::Metric),
            Some("metric") => Ok(Self::Metric),
            Some("imperial") => Ok(Self::Imperial),
            Some("kelvin") => Ok(Self::Kelvin),
            Some(other) => Err(format!(
                "Unknown units \"{}\". Expected metric, imperial or kelvin.",
                other
            )),
        }
    }

    /// Token used in cache keys and provider query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Kelvin => "kelvin",
        }
    }

    /// Display label for temperatures in this unit system.
    pub fn temperature_label(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Display label for wind speeds in this unit system.
    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Self::Imperial => "mph",
            _ => "m/s",
        }
    }

    /// Display label for pressure (always hPa from the provider).
    pub fn pressure_label(&self) -> &'static str {
        "hPa"
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Reading ==
/// A numeric measurement the provider may not report.
///
/// Serializes as a plain JSON number, or as the string `"N/A"` when the
/// provider omitted the field, so the response shape is always complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Value(f64),
    NotAvailable,
}

impl Reading {
    /// The sentinel string emitted for missing measurements.
    pub const SENTINEL: &'static str = "N/A";

    /// Returns the numeric value, if one was reported.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::NotAvailable => None,
        }
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::NotAvailable,
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::NotAvailable => serializer.serialize_str(Self::SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::Value(v)),
            Raw::Text(s) if s == Reading::SENTINEL => Ok(Self::NotAvailable),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"N/A\", got \"{}\"",
                s
            ))),
        }
    }
}

// == Normalized Weather ==
/// Geographic coordinates of the resolved city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions block of the normalized payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub visibility: Reading,
    pub uv_index: Reading,
}

/// Unit labels matching the requested unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitLabels {
    pub temperature: String,
    pub wind_speed: String,
    pub pressure: String,
}

impl From<Units> for UnitLabels {
    fn from(units: Units) -> Self {
        Self {
            temperature: units.temperature_label().to_string(),
            wind_speed: units.wind_speed_label().to_string(),
            pressure: units.pressure_label().to_string(),
        }
    }
}

/// Sunrise and sunset as ISO-8601 UTC timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}

/// The canonical output contract of the weather service.
///
/// Constructed once per provider fetch and stored in the cache as an
/// immutable snapshot. The `cached` flag is set on the copy returned to
/// the caller, never on the stored entry, and `timestamp` always reflects
/// when the underlying fetch occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeather {
    /// Provider-resolved display name, e.g. "London, GB"
    pub city: String,
    pub coordinates: Coordinates,
    pub current: CurrentConditions,
    pub units: UnitLabels,
    pub sun: SunTimes,
    /// ISO-8601 UTC time of normalization
    pub timestamp: String,
    /// Name of the provider that produced the data
    pub source: String,
    /// Whether this copy was served from the cache
    pub cached: bool,
}
