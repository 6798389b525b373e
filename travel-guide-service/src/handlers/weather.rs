use axum::{extract::State, Json};
use std::time::Instant;

use crate::models::{WeatherQuery, WeatherReport};
use crate::services::metrics::record_provider_call;
use crate::services::{ProviderError, Rejection};
use service_core::extract::ValidatedQuery;
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state, query), fields(city = %query.city))]
pub async fn get_weather(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<WeatherQuery>,
) -> Result<Json<WeatherReport>, AppError> {
    let provider = state.weather_provider.name();

    let started = Instant::now();
    let result = state.weather_provider.current_weather(&query.city).await;
    let elapsed = started.elapsed().as_secs_f64();

    match result {
        Ok(report) => {
            record_provider_call(provider, "ok", elapsed);
            Ok(Json(report))
        }
        Err(e) => {
            record_provider_call(provider, e.kind(), elapsed);
            tracing::warn!(provider = provider, error = %e, "Weather lookup failed");
            Err(weather_error(&query.city, e))
        }
    }
}

/// Translate a weather provider failure into the response shown to callers.
pub fn weather_error(city: &str, err: ProviderError) -> AppError {
    match err {
        ProviderError::NotConfigured(_) => {
            AppError::ConfigError(anyhow::anyhow!("Weather API key not configured."))
        }
        ProviderError::NetworkError(_) | ProviderError::Unknown(_) => {
            AppError::UpstreamError(format!("An unknown error occurred: {}", err))
        }
        ProviderError::Rejected { .. } => match err.rejection() {
            Some(Rejection::NotFound) => AppError::NotFound(format!("City not found: {}", city)),
            Some(Rejection::Unauthorized) => AppError::ConfigError(anyhow::anyhow!(
                "Weather API error: 401 Unauthorized. Check OpenWeatherMap API Key."
            )),
            Some(Rejection::Other(status)) => {
                AppError::UpstreamError(format!("Weather API request failed: {}", status))
            }
            None => AppError::UpstreamError(format!("An unknown error occurred: {}", err)),
        },
    }
}
