//! Forward projection from WGS 84 geographic coordinates to the SWEREF 99 TM
//! grid (EPSG:3006), using the Gauss–Krüger series expansion on the GRS 80
//! ellipsoid. The series is accurate to well under a meter over the whole
//! Swedish mainland (roughly lat 55–69°N, lon 11–24°E).

use crate::geodesy::errors::ConvertError;
use crate::geodesy::models::{Sweref99Coordinates, Wgs84Coordinates};

/// GRS 80 semi-major axis, meters.
const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
/// GRS 80 flattening.
const FLATTENING: f64 = 1.0 / 298.257_222_101;
/// SWEREF 99 TM central meridian, degrees east.
const CENTRAL_MERIDIAN_DEG: f64 = 15.0;
/// SWEREF 99 TM scale factor along the central meridian.
const SCALE_FACTOR: f64 = 0.9996;
const FALSE_NORTHING: f64 = 0.0;
const FALSE_EASTING: f64 = 500_000.0;

/// Whether the coordinate is a usable WGS 84 position: both components
/// finite, latitude within ±90° and longitude within ±180°, boundaries
/// included.
pub fn is_valid_wgs84(coordinates: Wgs84Coordinates) -> bool {
    coordinates.lat.is_finite()
        && coordinates.lon.is_finite()
        && (-90.0..=90.0).contains(&coordinates.lat)
        && (-180.0..=180.0).contains(&coordinates.lon)
}

/// Rounds a length in meters to a whole meter, with halves always going away
/// from zero (`1.5 → 2`, `-1.5 → -2`), never to the nearest even integer.
pub fn round_to_meters(meters: f64) -> f64 {
    // `f64::round` rounds half away from zero, which is exactly the grid
    // convention wanted here. Not `round_ties_even`.
    meters.round()
}

/// Projects a WGS 84 coordinate onto the SWEREF 99 TM grid, rounded to whole
/// meters.
///
/// Fails with [`ConvertError::InvalidInput`] before doing any arithmetic if
/// the input is out of range or non-finite, and with
/// [`ConvertError::Degenerate`] if the input is valid but lies where the
/// transverse Mercator map blows up (on the equator 90° of longitude away
/// from the central meridian the conformal longitude reaches `atanh(±1)`).
#[allow(non_snake_case)]
pub fn to_sweref99(coordinates: Wgs84Coordinates) -> Result<Sweref99Coordinates, ConvertError> {
    if !is_valid_wgs84(coordinates) {
        return Err(ConvertError::InvalidInput {
            lat: coordinates.lat,
            lon: coordinates.lon,
        });
    }

    let lat = coordinates.lat.to_radians();
    let lon = coordinates.lon.to_radians();

    let e2 = FLATTENING * (2.0 - FLATTENING);
    let n = FLATTENING / (2.0 - FLATTENING);
    let a_hat = SEMI_MAJOR_AXIS / (1.0 + n) * (1.0 + n.powi(2) / 4.0 + n.powi(4) / 64.0);

    // Coefficients for the conformal latitude expansion.
    let A = e2;
    let B = (5.0 * e2.powi(2) - e2.powi(3)) / 6.0;
    let C = (104.0 * e2.powi(3) - 45.0 * e2.powi(4)) / 120.0;
    let D = 1237.0 * e2.powi(4) / 1260.0;

    // Coefficients for the Krüger series itself.
    let beta1 = n / 2.0 - 2.0 / 3.0 * n.powi(2) + 5.0 / 16.0 * n.powi(3) + 41.0 / 180.0 * n.powi(4);
    let beta2 = 13.0 / 48.0 * n.powi(2) - 3.0 / 5.0 * n.powi(3) + 557.0 / 1440.0 * n.powi(4);
    let beta3 = 61.0 / 240.0 * n.powi(3) - 103.0 / 140.0 * n.powi(4);
    let beta4 = 49561.0 / 161280.0 * n.powi(4);

    let delta_lon = lon - CENTRAL_MERIDIAN_DEG.to_radians();
    let sin_lat = lat.sin();
    let conformal_lat =
        lat - sin_lat * lat.cos() * (A + B * sin_lat.powi(2) + C * sin_lat.powi(4) + D * sin_lat.powi(6));

    // `atanh` hits ±1 on the singular set, which yields ±inf here rather
    // than a panic; the finiteness check below catches it.
    let xi = (conformal_lat.tan() / delta_lon.cos()).atan();
    let eta = (conformal_lat.cos() * delta_lon.sin()).atanh();

    let northing = SCALE_FACTOR
        * a_hat
        * (xi
            + beta1 * (2.0 * xi).sin() * (2.0 * eta).cosh()
            + beta2 * (4.0 * xi).sin() * (4.0 * eta).cosh()
            + beta3 * (6.0 * xi).sin() * (6.0 * eta).cosh()
            + beta4 * (8.0 * xi).sin() * (8.0 * eta).cosh())
        + FALSE_NORTHING;
    let easting = SCALE_FACTOR
        * a_hat
        * (eta
            + beta1 * (2.0 * xi).cos() * (2.0 * eta).sinh()
            + beta2 * (4.0 * xi).cos() * (4.0 * eta).sinh()
            + beta3 * (6.0 * xi).cos() * (6.0 * eta).sinh()
            + beta4 * (8.0 * xi).cos() * (8.0 * eta).sinh())
        + FALSE_EASTING;

    if !northing.is_finite() || !easting.is_finite() {
        return Err(ConvertError::Degenerate {
            lat: coordinates.lat,
            lon: coordinates.lon,
        });
    }

    Ok(Sweref99Coordinates {
        northing: round_to_meters(northing),
        easting: round_to_meters(easting),
    })
}
