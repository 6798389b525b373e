pub mod destination;
pub mod itinerary;
pub mod weather;

pub use destination::DestinationRecord;
pub use itinerary::{ItineraryRequest, ItineraryResult};
pub use weather::{WeatherQuery, WeatherReport};
