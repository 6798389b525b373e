//! Itinerary prompt construction and model reply cleanup.

use crate::models::ItineraryRequest;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE: &str = "```";

/// Render the planner prompt for a request.
///
/// Values are inserted verbatim; no bounds are applied to `duration`.
pub fn build_prompt(request: &ItineraryRequest) -> String {
    format!(
        "You are an expert travel planner. A user wants to visit: {destination}\n\
         They will be there for {duration} days.\n\
         Their interests include: {interests}.\n\
         \n\
         Create a detailed, day-by-day travel itinerary.\n\
         \n\
         IMPORTANT: Respond ONLY with a valid JSON object.\n\
         The JSON object must have a single key named \"itinerary\".\n\
         The value of \"itinerary\" must be an array of objects.\n\
         Each object in the array must have two keys: \"day\" (e.g., \"Day 1\") and \"activities\" (an array of strings).\n\
         \n\
         Do not include any text, markdown, or any characters before or after the JSON object.\n",
        destination = request.destination,
        duration = request.duration,
        interests = request.interests,
    )
}

/// Strip markdown JSON fences and surrounding whitespace from a model reply.
///
/// The result is not parsed; malformed JSON passes through unchanged.
pub fn clean_model_reply(raw: &str) -> String {
    raw.replace(JSON_FENCE_OPEN, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}
