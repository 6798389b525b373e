//! Mock provider implementations for testing.

use super::{
    GenerationParams, ProviderError, ProviderResponse, TextProvider, WeatherProvider,
};
use crate::models::WeatherReport;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

/// Mock text provider returning a canned reply or a canned failure.
pub struct MockTextProvider {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

/// Rough token estimate (four bytes per token), saturating at `i32::MAX`.
fn approx_tokens(text: &str) -> i32 {
    i32::try_from(text.len() / 4).unwrap_or(i32::MAX)
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            Ok(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: approx_tokens(prompt),
                output_tokens: approx_tokens(text),
            }),
            Err(message) => Err(ProviderError::Unknown(message.clone())),
        }
    }
}

/// Mock weather provider.
pub enum MockWeatherProvider {
    /// Reports the given weather for any city, echoing the city name.
    Reporting {
        temperature: f64,
        description: String,
        icon: String,
    },
    /// Behaves like a provider with no API key.
    Unconfigured,
    /// Rejects every city with the given status.
    Rejecting(StatusCode),
    /// Fails at the transport level.
    Unreachable,
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        match self {
            MockWeatherProvider::Reporting {
                temperature,
                description,
                icon,
            } => Ok(WeatherReport {
                city: city.to_string(),
                temperature: *temperature,
                description: description.clone(),
                icon: icon.clone(),
            }),
            MockWeatherProvider::Unconfigured => Err(ProviderError::NotConfigured(
                "Weather API key not configured.".to_string(),
            )),
            MockWeatherProvider::Rejecting(status) => Err(ProviderError::Rejected {
                status: *status,
                message: "rejected by mock".to_string(),
            }),
            MockWeatherProvider::Unreachable => Err(ProviderError::NetworkError(
                "connection refused".to_string(),
            )),
        }
    }
}
