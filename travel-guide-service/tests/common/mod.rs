#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use travel_guide_service::config::DEFAULT_ALLOWED_ORIGINS;
use travel_guide_service::services::providers::mock::{MockTextProvider, MockWeatherProvider};
use travel_guide_service::services::{GenerationParams, TextProvider, WeatherProvider};
use travel_guide_service::{build_router, AppState};

pub fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

pub fn state_with(
    text_provider: Arc<dyn TextProvider>,
    weather_provider: Arc<dyn WeatherProvider>,
) -> AppState {
    AppState {
        text_provider,
        weather_provider,
        generation: GenerationParams::default(),
    }
}

pub fn mock_router(text: MockTextProvider, weather: MockWeatherProvider) -> Router {
    build_router(
        state_with(Arc::new(text), Arc::new(weather)),
        &default_origins(),
    )
}

/// Send a request through the router and decode the JSON body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.expect("router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not JSON")
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Serve `router` on a random local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}
