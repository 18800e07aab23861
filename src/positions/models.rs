use crate::geodesy::models::Wgs84Coordinates;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named geographic position that quiz takers are trained to recognize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: Uuid,
    pub name: String,
    pub coordinates: Wgs84Coordinates,
    pub address: String,
}
