//! Request DTOs for the weather API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for POST /api/weather
///
/// # Fields
/// - `city`: The city to look up
/// - `units`: Optional unit system token ("metric", "imperial", "kelvin")
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRequest {
    /// City name
    pub city: String,
    /// Optional unit system (defaults to metric)
    #[serde(default)]
    pub units: Option<String>,
}

impl WeatherRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Unit-token validation happens separately when parsing into `Units`.
    pub fn validate(&self) -> Option<String> {
        let city = self.city.trim();
        if city.is_empty() {
            return Some("City name is required".to_string());
        }
        if city.len() < 2 {
            return Some("Invalid city name. Please provide a valid city name.".to_string());
        }
        None
    }
}

/// Query string for GET /api/weather/:city
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitsQuery {
    #[serde(default)]
    pub units: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_request_deserialize() {
        let json = r#"{"city": "London"}"#;
        let req: WeatherRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.city, "London");
        assert!(req.units.is_none());
    }

    #[test]
    fn test_weather_request_with_units() {
        let json = r#"{"city": "London", "units": "imperial"}"#;
        let req: WeatherRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.units.as_deref(), Some("imperial"));
    }

    #[test]
    fn test_validate_empty_city() {
        let req = WeatherRequest {
            city: "   ".to_string(),
            units: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_single_char_city() {
        let req = WeatherRequest {
            city: "A".to_string(),
            units: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = WeatherRequest {
            city: "London".to_string(),
            units: Some("metric".to_string()),
        };
        assert!(req.validate().is_none());
    }
}
