use crate::geodesy::errors::ConvertError;
use crate::geodesy::models::Wgs84Coordinates;
use crate::geodesy::projection::{is_valid_wgs84, round_to_meters, to_sweref99};

fn coordinates(lat: f64, lon: f64) -> Wgs84Coordinates {
    Wgs84Coordinates { lat, lon }
}

#[test]
fn stockholm_central_station_projects_within_a_meter() {
    let projected = to_sweref99(coordinates(59.330231, 18.059196)).unwrap();

    assert!((projected.northing - 6_580_822.0).abs() <= 1.0);
    assert!((projected.easting - 674_032.0).abs() <= 1.0);
}

#[test]
fn gothenburg_projects_within_a_meter() {
    let projected = to_sweref99(coordinates(57.7089, 11.9746)).unwrap();

    assert!((projected.northing - 6_400_326.0).abs() <= 1.0);
    assert!((projected.easting - 319_758.0).abs() <= 1.0);
}

#[test]
fn norrbotten_projects_within_a_meter() {
    let projected = to_sweref99(coordinates(65.5841, 22.1547)).unwrap();

    assert!((projected.northing - 7_292_316.0).abs() <= 1.0);
    assert!((projected.easting - 829_441.0).abs() <= 1.0);
}

#[test]
fn out_of_range_coordinates_are_rejected_before_projecting() {
    let error = to_sweref99(coordinates(999.0, 999.0)).unwrap_err();

    assert_eq!(
        error,
        ConvertError::InvalidInput {
            lat: 999.0,
            lon: 999.0
        }
    );
}

#[test]
fn nan_coordinates_are_rejected() {
    assert!(to_sweref99(coordinates(f64::NAN, 0.0)).is_err());
    assert!(to_sweref99(coordinates(0.0, f64::NAN)).is_err());
}

#[test]
fn poles_and_antimeridian_are_valid_and_finite() {
    // The poles land on the central meridian extension; ±180° longitude is
    // far outside Sweden but still maps to a finite grid point at nonzero
    // latitude.
    for (lat, lon) in [(90.0, 0.0), (-90.0, 0.0), (90.0, 180.0), (-90.0, -180.0)] {
        let projected = to_sweref99(coordinates(lat, lon)).unwrap();
        assert!(projected.northing.is_finite());
        assert!(projected.easting.is_finite());
    }
}

#[test]
fn equator_quarter_turn_from_central_meridian_is_degenerate() {
    // 90° of longitude from the 15°E central meridian, on the equator, is
    // the singular point of the transverse Mercator map.
    let error = to_sweref99(coordinates(0.0, 105.0)).unwrap_err();

    assert_eq!(
        error,
        ConvertError::Degenerate {
            lat: 0.0,
            lon: 105.0
        }
    );
}

#[test]
fn validation_truth_table() {
    assert!(is_valid_wgs84(coordinates(0.0, 0.0)));
    assert!(is_valid_wgs84(coordinates(90.0, 180.0)));
    assert!(is_valid_wgs84(coordinates(-90.0, -180.0)));
    assert!(!is_valid_wgs84(coordinates(91.0, 0.0)));
    assert!(!is_valid_wgs84(coordinates(-91.0, 0.0)));
    assert!(!is_valid_wgs84(coordinates(0.0, 181.0)));
    assert!(!is_valid_wgs84(coordinates(0.0, -181.0)));
    assert!(!is_valid_wgs84(coordinates(f64::NAN, 0.0)));
    assert!(!is_valid_wgs84(coordinates(0.0, f64::NAN)));
    assert!(!is_valid_wgs84(coordinates(f64::INFINITY, 0.0)));
    assert!(!is_valid_wgs84(coordinates(0.0, f64::NEG_INFINITY)));
}

#[test]
fn rounding_sends_halves_away_from_zero() {
    assert_eq!(round_to_meters(1.5), 2.0);
    // Banker's rounding would give 2.0 here.
    assert_eq!(round_to_meters(2.5), 3.0);
    assert_eq!(round_to_meters(-1.5), -2.0);
    assert_eq!(round_to_meters(-2.5), -3.0);
    assert_eq!(round_to_meters(0.49), 0.0);
    assert_eq!(round_to_meters(-0.49), -0.0);
}
