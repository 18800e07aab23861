use thiserror::Error;

/// All the ways a WGS 84 → SWEREF 99 TM conversion can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The input never made it to the projection: a component is out of
    /// range or not a finite number.
    #[error("invalid WGS 84 coordinates: lat {lat}, lon {lon}")]
    InvalidInput { lat: f64, lon: f64 },
    /// The input passed validation but sits outside the domain where the
    /// transverse Mercator map is numerically sound, so the series produced
    /// a non-finite value.
    #[error("projection to SWEREF 99 TM is degenerate at lat {lat}, lon {lon}")]
    Degenerate { lat: f64, lon: f64 },
}
