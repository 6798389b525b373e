//! OpenWeatherMap current-weather provider.

use super::{ProviderError, WeatherProvider};
use crate::models::WeatherReport;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::observability::TracedClientExt;
use std::time::Duration;

/// Current weather endpoint.
pub const OPENWEATHERMAP_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const UNITS: &str = "metric";

#[derive(Debug)]
pub struct OpenWeatherMapConfig {
    /// Without a key every call fails before any request is sent.
    pub api_key: Option<Secret<String>>,
    pub api_url: String,
    pub timeout: Duration,
}

pub struct OpenWeatherMapProvider {
    config: OpenWeatherMapConfig,
    client: Client,
}

impl OpenWeatherMapProvider {
    pub fn new(config: OpenWeatherMapConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Unknown(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapProvider {
    fn name(&self) -> &'static str {
        "openweathermap"
    }

    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let api_key = self.config.api_key.as_ref().ok_or_else(|| {
            ProviderError::NotConfigured("Weather API key not configured.".to_string())
        })?;

        tracing::debug!(city = %city, "Requesting current weather");

        let response = self
            .client
            .traced_get(&self.config.api_url)
            .query(&[
                ("q", city),
                ("appid", api_key.expose_secret().as_str()),
                ("units", UNITS),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_default();
            return Err(ProviderError::Rejected { status, message });
        }

        let body: CurrentWeatherResponse = response.json().await?;
        body.into_report()
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }

    out
}

// ============================================================================
// OpenWeatherMap API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    main: MainBlock,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl CurrentWeatherResponse {
    fn into_report(self) -> Result<WeatherReport, ProviderError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            ProviderError::Unknown("Weather response has no conditions".to_string())
        })?;

        Ok(WeatherReport {
            city: self.name,
            temperature: self.main.temp,
            description: title_case(&condition.description),
            icon: condition.icon,
        })
    }
}
