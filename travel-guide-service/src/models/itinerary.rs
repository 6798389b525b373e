use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /generate-itinerary`.
///
/// `duration` and `interests` are forwarded into the prompt as given; only the
/// destination is required to be non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItineraryRequest {
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub destination: String,
    pub duration: i64,
    pub interests: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryResult {
    /// Model output with code fences removed. Expected to be JSON, not checked.
    pub data_from_ai: String,
    pub prompt_used: String,
}
