//! Real provider clients against local stub servers.

mod common;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use common::{default_origins, post_json, send, spawn_stub, state_with};
use secrecy::Secret;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use travel_guide_service::build_router;
use travel_guide_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use travel_guide_service::services::providers::mock::MockTextProvider;
use travel_guide_service::services::providers::openweathermap::{
    OpenWeatherMapConfig, OpenWeatherMapProvider,
};
use travel_guide_service::services::{
    GenerationParams, ProviderError, Rejection, TextProvider, WeatherProvider,
};

// ============================================================================
// OpenWeatherMap stub
// ============================================================================

async fn fake_weather(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);

    if params.get("appid").map(String::as_str) != Some("good-key") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
            .into_response();
    }
    if params.get("units").map(String::as_str) != Some("metric") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "units" }))).into_response();
    }

    match params.get("q").map(String::as_str) {
        Some("Atlantis") => (
            StatusCode::NOT_FOUND,
            Json(json!({ "cod": "404", "message": "city not found" })),
        )
            .into_response(),
        Some("Overload") => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        Some("Garbage") => (StatusCode::OK, "<html>oops</html>").into_response(),
        Some(city) => Json(json!({
            "name": city,
            "main": { "temp": 14.2, "feels_like": 13.0 },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10n" }]
        }))
        .into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn weather_stub() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/data/2.5/weather", get(fake_weather))
        .with_state(hits.clone());
    let base = spawn_stub(router).await;
    (format!("{}/data/2.5/weather", base), hits)
}

fn weather_provider(api_url: &str, key: Option<&str>) -> OpenWeatherMapProvider {
    OpenWeatherMapProvider::new(OpenWeatherMapConfig {
        api_key: key.map(|k| Secret::new(k.to_string())),
        api_url: api_url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to build weather provider")
}

#[tokio::test]
async fn weather_success_is_normalized() {
    let (url, hits) = weather_stub().await;
    let provider = weather_provider(&url, Some("good-key"));

    let report = provider.current_weather("Dublin").await.unwrap();

    assert_eq!(report.city, "Dublin");
    assert_eq!(report.temperature, 14.2);
    assert_eq!(report.description, "Light Rain");
    assert_eq!(report.icon, "10n");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn weather_rejections_are_classified() {
    let (url, _) = weather_stub().await;

    let not_found = weather_provider(&url, Some("good-key"))
        .current_weather("Atlantis")
        .await
        .unwrap_err();
    assert_eq!(not_found.rejection(), Some(Rejection::NotFound));

    let unauthorized = weather_provider(&url, Some("bad-key"))
        .current_weather("Dublin")
        .await
        .unwrap_err();
    assert_eq!(unauthorized.rejection(), Some(Rejection::Unauthorized));

    let unavailable = weather_provider(&url, Some("good-key"))
        .current_weather("Overload")
        .await
        .unwrap_err();
    assert_eq!(
        unavailable.rejection(),
        Some(Rejection::Other(StatusCode::SERVICE_UNAVAILABLE))
    );
}

#[tokio::test]
async fn weather_unparseable_body_is_unknown() {
    let (url, _) = weather_stub().await;

    let err = weather_provider(&url, Some("good-key"))
        .current_weather("Garbage")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Unknown(_)));
}

#[tokio::test]
async fn weather_endpoint_without_key_makes_no_outbound_call() {
    let (url, hits) = weather_stub().await;
    let router = build_router(
        state_with(
            Arc::new(MockTextProvider::replying("{}")),
            Arc::new(weather_provider(&url, None)),
        ),
        &default_origins(),
    );

    let (status, body) = send(router, common::get("/get-weather?city=Dublin")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Weather API key not configured.");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn weather_endpoint_maps_unknown_city_to_404() {
    let (url, _) = weather_stub().await;
    let router = build_router(
        state_with(
            Arc::new(MockTextProvider::replying("{}")),
            Arc::new(weather_provider(&url, Some("good-key"))),
        ),
        &default_origins(),
    );

    let (status, body) = send(router, common::get("/get-weather?city=Atlantis")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "City not found: Atlantis");
}

#[tokio::test]
async fn weather_transport_failure_does_not_expose_the_key() {
    let router = build_router(
        state_with(
            Arc::new(MockTextProvider::replying("{}")),
            Arc::new(weather_provider("http://127.0.0.1:9/weather", Some("SUPERSECRETKEY"))),
        ),
        &default_origins(),
    );

    let (status, body) = send(router, common::get("/get-weather?city=Paris")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("An unknown error occurred:"));
    assert!(!detail.contains("SUPERSECRETKEY"));
    assert!(!detail.contains("appid"));
}

#[tokio::test]
async fn provider_error_from_reqwest_drops_the_url() {
    let err = reqwest::get("http://127.0.0.1:9/weather?appid=SUPERSECRETKEY")
        .await
        .unwrap_err();

    let err = ProviderError::from(err);

    assert!(matches!(err, ProviderError::NetworkError(_)));
    assert!(!err.to_string().contains("SUPERSECRETKEY"));
}

// ============================================================================
// Gemini stub
// ============================================================================

async fn fake_gemini(headers: HeaderMap, Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("good-key") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "code": 403, "message": "API key not valid" } })),
        )
            .into_response();
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();

    if prompt.contains("Nowhere") {
        return Json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .into_response();
    }

    Json(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "```json\n{\"itinerary\":" },
                    { "text": "[{\"day\":\"Day 1\",\"activities\":[\"Walk\"]}]}\n```" }
                ]
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 30 }
    }))
    .into_response()
}

async fn gemini_stub() -> String {
    let router = Router::new().route("/v1beta/models/:call", post(fake_gemini));
    format!("{}/v1beta", spawn_stub(router).await)
}

fn gemini_provider(base_url: &str, key: &str) -> GeminiTextProvider {
    GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new(key.to_string()),
        model: "gemini-2.5-flash".to_string(),
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to build Gemini provider")
}

#[tokio::test]
async fn gemini_joins_text_parts_and_reports_usage() {
    let base = gemini_stub().await;

    let response = gemini_provider(&base, "good-key")
        .generate("Plan a trip to Rome", &GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(
        response.text,
        "```json\n{\"itinerary\":[{\"day\":\"Day 1\",\"activities\":[\"Walk\"]}]}\n```"
    );
    assert_eq!(response.input_tokens, 120);
    assert_eq!(response.output_tokens, 30);
}

#[tokio::test]
async fn gemini_error_status_is_rejected() {
    let base = gemini_stub().await;

    let err = gemini_provider(&base, "bad-key")
        .generate("Plan a trip to Rome", &GenerationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Rejected { status, .. } if status == StatusCode::FORBIDDEN
    ));
}

#[tokio::test]
async fn gemini_blocked_response_is_unknown() {
    let base = gemini_stub().await;

    let err = gemini_provider(&base, "good-key")
        .generate("Plan a trip to Nowhere", &GenerationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Unknown(ref msg) if msg.contains("SAFETY")));
}

#[tokio::test]
async fn itinerary_endpoint_end_to_end_with_gemini_client() {
    let base = gemini_stub().await;
    let router = build_router(
        state_with(
            Arc::new(gemini_provider(&base, "good-key")),
            Arc::new(weather_provider("http://127.0.0.1:9/weather", None)),
        ),
        &default_origins(),
    );

    let (status, body) = send(
        router,
        post_json(
            "/generate-itinerary",
            json!({ "destination": "Rome", "duration": 1, "interests": "history" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data_from_ai"],
        "{\"itinerary\":[{\"day\":\"Day 1\",\"activities\":[\"Walk\"]}]}"
    );
}

#[tokio::test]
async fn itinerary_endpoint_masks_gemini_rejection() {
    let base = gemini_stub().await;
    let text: Arc<dyn TextProvider> = Arc::new(gemini_provider(&base, "bad-key"));
    let router = build_router(
        state_with(
            text,
            Arc::new(weather_provider("http://127.0.0.1:9/weather", None)),
        ),
        &default_origins(),
    );

    let (status, body) = send(
        router,
        post_json(
            "/generate-itinerary",
            json!({ "destination": "Rome", "duration": 1, "interests": "history" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "AI Generation Failed." }));
}
