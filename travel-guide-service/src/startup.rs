//! Application startup and lifecycle management.
//!
//! Builds provider clients from configuration, assembles the HTTP router and
//! runs it until a shutdown signal arrives.

use crate::config::TravelConfig;
use crate::handlers::{
    generate_itinerary, get_weather, health_check, metrics_endpoint, suggested_trips, welcome,
};
use crate::middleware::metrics_middleware;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::openweathermap::{OpenWeatherMapConfig, OpenWeatherMapProvider};
use crate::services::{GenerationParams, TextProvider, WeatherProvider};
use axum::{
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{request_id_middleware, security_headers_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Immutable after startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub text_provider: Arc<dyn TextProvider>,
    pub weather_provider: Arc<dyn WeatherProvider>,
    pub generation: GenerationParams,
}

/// Build the HTTP router for the given state.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/suggested-trips", get(suggested_trips))
        .route("/generate-itinerary", post(generate_itinerary))
        .route("/get-weather", get(get_weather))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .route_layer(from_fn(metrics_middleware))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
}

/// CORS for the configured origin allow-list, with credentials.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Wildcards are not allowed together with credentials, so mirror instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the real provider clients.
    pub async fn build(config: TravelConfig) -> Result<Self, AppError> {
        let TravelConfig {
            common,
            gemini,
            weather,
            cors,
        } = config;

        let text_provider = GeminiTextProvider::new(GeminiConfig {
            api_key: gemini.api_key,
            model: gemini.model,
            base_url: gemini.api_base,
            timeout: Duration::from_secs(gemini.timeout_secs),
        })
        .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %text_provider.model(),
            "Initialized Gemini text provider"
        );

        if weather.api_key.is_none() {
            tracing::warn!("WEATHER_API_KEY not set; /get-weather will report a configuration error");
        }

        let weather_provider = OpenWeatherMapProvider::new(OpenWeatherMapConfig {
            api_key: weather.api_key,
            api_url: weather.api_url,
            timeout: Duration::from_secs(weather.timeout_secs),
        })
        .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        let state = AppState {
            text_provider: Arc::new(text_provider),
            weather_provider: Arc::new(weather_provider),
            generation: GenerationParams {
                temperature: gemini.temperature,
                max_tokens: gemini.max_output_tokens,
            },
        };

        Self::with_state(common.port, state, &cors.allowed_origins).await
    }

    /// Bind a listener and build the router around an existing state.
    ///
    /// Port 0 picks a random free port.
    pub async fn with_state(
        port: u16,
        state: AppState,
        allowed_origins: &[String],
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Travel guide service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state, allowed_origins),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal is received.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
