use serde::{Deserialize, Serialize};

/// A geographic coordinate in the WGS 84 datum (EPSG:4326), in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wgs84Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A projected coordinate in SWEREF 99 TM (EPSG:3006), in whole meters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweref99Coordinates {
    pub northing: f64,
    pub easting: f64,
}
