//! HTTP handlers for the travel guide API.

pub mod health;
pub mod itinerary;
pub mod trips;
pub mod weather;

pub use health::{health_check, metrics_endpoint, welcome};
pub use itinerary::generate_itinerary;
pub use trips::suggested_trips;
pub use weather::get_weather;
