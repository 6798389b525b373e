use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /get-weather`.
#[derive(Debug, Deserialize, Validate)]
pub struct WeatherQuery {
    pub city: String,
}

/// Normalized current weather for a city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub description: String,
    /// Provider icon code, e.g. "10d".
    pub icon: String,
}
