use crate::services::providers::gemini::GEMINI_API_BASE;
use crate::services::providers::openweathermap::OPENWEATHERMAP_API_URL;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;
const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 30;

/// Local development origins allowed by CORS unless overridden.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 7] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://localhost:8000",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3001",
    "http://127.0.0.1:8000",
];

#[derive(Debug)]
pub struct TravelConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub weather: WeatherSettings,
    pub cors: CorsSettings,
}

#[derive(Debug)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug)]
pub struct WeatherSettings {
    /// Optional: only `/get-weather` degrades when absent.
    pub api_key: Option<Secret<String>>,
    pub api_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl TravelConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_key = get("GEMINI_API_KEY").ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_API_KEY environment variable is missing"
            ))
        })?;

        let allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(TravelConfig {
            common,
            gemini: GeminiSettings {
                api_key: Secret::new(gemini_key),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
                api_base: get("GEMINI_API_BASE").unwrap_or_else(|| GEMINI_API_BASE.to_string()),
                timeout_secs: parse_opt("GEMINI_TIMEOUT_SECS", get("GEMINI_TIMEOUT_SECS"))?
                    .unwrap_or(DEFAULT_GEMINI_TIMEOUT_SECS),
                temperature: parse_opt("GEMINI_TEMPERATURE", get("GEMINI_TEMPERATURE"))?,
                max_output_tokens: parse_opt(
                    "GEMINI_MAX_OUTPUT_TOKENS",
                    get("GEMINI_MAX_OUTPUT_TOKENS"),
                )?,
            },
            weather: WeatherSettings {
                api_key: get("WEATHER_API_KEY").map(Secret::new),
                api_url: get("WEATHER_API_URL")
                    .unwrap_or_else(|| OPENWEATHERMAP_API_URL.to_string()),
                timeout_secs: parse_opt("WEATHER_TIMEOUT_SECS", get("WEATHER_TIMEOUT_SECS"))?
                    .unwrap_or(DEFAULT_WEATHER_TIMEOUT_SECS),
            },
            cors: CorsSettings { allowed_origins },
        })
    }
}

fn parse_opt<T>(key: &str, value: Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("{} has an invalid value: {}", key, e))
            })
        })
        .transpose()
}
