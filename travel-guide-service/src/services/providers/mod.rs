//! External provider abstractions and implementations.
//!
//! Handlers only see the traits defined here, so the real HTTP clients
//! (Gemini, OpenWeatherMap) can be swapped for the mocks in tests.

pub mod gemini;
pub mod mock;
pub mod openweathermap;

use crate::models::WeatherReport;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Error type for provider operations.
///
/// Closed set: every outbound failure lands in exactly one variant, with
/// `Unknown` reserved for conditions nothing else describes.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("{status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Unknown(String),
}

impl ProviderError {
    /// Classification of a provider-side rejection, if this is one.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ProviderError::Rejected { status, .. } => Some(Rejection::from(*status)),
            _ => None,
        }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::NetworkError(_) => "network",
            ProviderError::Rejected { .. } => "rejected",
            ProviderError::Unknown(_) => "unknown",
        }
    }
}

/// Request URLs can carry credentials in the query string, so the URL is
/// dropped from the message.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            ProviderError::Unknown(format!("Failed to parse response: {}", err))
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}

/// Provider rejections the gateway tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotFound,
    Unauthorized,
    Other(StatusCode),
}

impl From<StatusCode> for Rejection {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Rejection::NotFound,
            StatusCode::UNAUTHORIZED => Rejection::Unauthorized,
            other => Rejection::Other(other),
        }
    }
}

/// Generation parameters for text requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

/// Result of a text generation call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name for logs and metrics.
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;
}

/// Trait for current-weather providers (e.g., OpenWeatherMap).
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Provider name for logs and metrics.
    fn name(&self) -> &'static str;

    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}
