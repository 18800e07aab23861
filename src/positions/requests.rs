use crate::geodesy::models::Wgs84Coordinates;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /positions` and `PUT /positions/:id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavePositionRequest {
    pub name: String,
    pub coordinates: Wgs84Coordinates,
    pub address: String,
}

/// Body of `POST /positions/check`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub id: Uuid,
    pub name: String,
}
