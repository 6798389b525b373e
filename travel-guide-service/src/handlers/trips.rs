use axum::Json;

use crate::models::DestinationRecord;
use crate::services::catalog;

pub async fn suggested_trips() -> Json<&'static [DestinationRecord]> {
    Json(catalog::suggested_trips())
}
