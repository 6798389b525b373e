pub mod catalog;
pub mod itinerary;
pub mod metrics;
pub mod providers;

pub use metrics::{get_metrics, init_metrics};
pub use providers::{
    GenerationParams, ProviderError, ProviderResponse, Rejection, TextProvider, WeatherProvider,
};
