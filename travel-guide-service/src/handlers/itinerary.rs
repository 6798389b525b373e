use axum::{extract::State, Json};
use std::time::Instant;

use crate::models::{ItineraryRequest, ItineraryResult};
use crate::services::itinerary::{build_prompt, clean_model_reply};
use crate::services::metrics::record_provider_call;
use crate::startup::AppState;
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

/// Detail returned for every generation failure; the cause is only logged.
pub const GENERATION_FAILED: &str = "AI Generation Failed.";

#[tracing::instrument(
    skip(state, request),
    fields(destination = %request.destination, duration = request.duration)
)]
pub async fn generate_itinerary(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ItineraryRequest>,
) -> Result<Json<ItineraryResult>, AppError> {
    let prompt = build_prompt(&request);
    let provider = state.text_provider.name();

    let started = Instant::now();
    let result = state
        .text_provider
        .generate(&prompt, &state.generation)
        .await;
    let elapsed = started.elapsed().as_secs_f64();

    let response = match result {
        Ok(response) => {
            record_provider_call(provider, "ok", elapsed);
            response
        }
        Err(e) => {
            record_provider_call(provider, e.kind(), elapsed);
            tracing::error!(
                provider = provider,
                error = %e,
                "Error calling text provider for itinerary"
            );
            return Err(AppError::UpstreamError(GENERATION_FAILED.to_string()));
        }
    };

    tracing::info!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Itinerary generated"
    );

    Ok(Json(ItineraryResult {
        data_from_ai: clean_model_reply(&response.text),
        prompt_used: prompt,
    }))
}
