use serde::Serialize;

/// A curated destination shown on the suggested trips page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinationRecord {
    pub id: u32,
    pub destination: &'static str,
    pub country_code: &'static str,
    pub country_flag: &'static str,
    pub highlights: &'static str,
    pub best_time: &'static str,
    pub image_url: &'static str,
    pub google_earth_url: &'static str,
}
