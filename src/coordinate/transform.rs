//! WGS84 / GCJ02 / BD09 conversion
//!
//! Every function here is pure and total over `f64`: no validation, no
//! errors, NaN propagates. The GCJ02 inverse is the usual single-pass
//! reflection and carries a small residual error (well under a meter for
//! most of mainland China).

use std::f64::consts::PI;

use super::bbox::BoundingBox;
use super::crs::CoordinateSystem;
use super::point::Coordinate;

/// Semi-major axis of the Krasovsky 1940 ellipsoid
pub const A: f64 = 6378245.0;

/// First eccentricity squared of the Krasovsky 1940 ellipsoid
pub const EE: f64 = 0.00669342162296594323;

/// Scaling constant of the BD09 polar offset
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// Mainland China bounding box, the only area GCJ02 offsets apply to
pub const CHINA_BOUNDS: BoundingBox = BoundingBox::new(73.66, 3.86, 135.05, 53.55);

/// Returns true if the point lies inside mainland China's bounding box
pub fn is_in_china(lon: f64, lat: f64) -> bool {
    CHINA_BOUNDS.contains(lon, lat)
}

/// Raw longitude offset; `x`, `y` are already shifted by (105, 35)
pub(crate) fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Raw latitude offset; `x`, `y` are already shifted by (105, 35)
pub(crate) fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Forward GCJ02 offset without the regional check
///
/// The raw offsets are scaled into degrees with the meridian radius of
/// curvature (latitude) and the prime vertical radius times cos(lat)
/// (longitude), both evaluated at the input latitude.
fn offset(lon: f64, lat: f64) -> (f64, f64) {
    let d_lon = transform_lon(lon - 105.0, lat - 35.0);
    let d_lat = transform_lat(lon - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = 1.0 - EE * rad_lat.sin() * rad_lat.sin();
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (lon + d_lon, lat + d_lat)
}

/// WGS84 to GCJ02. Points outside mainland China are returned unchanged.
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    if !is_in_china(lon, lat) {
        return (lon, lat);
    }
    offset(lon, lat)
}

/// GCJ02 to WGS84, single-pass approximate inverse
///
/// Applies the forward offset to the GCJ02 point and reflects the input
/// across it. Points outside mainland China are returned unchanged.
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    if !is_in_china(lon, lat) {
        return (lon, lat);
    }
    let (mg_lon, mg_lat) = offset(lon, lat);
    (lon * 2.0 - mg_lon, lat * 2.0 - mg_lat)
}

/// GCJ02 to BD09. Applied everywhere, no regional check.
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    let z = (lon * lon + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lon) + 0.000003 * (lon * X_PI).cos();
    (z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// BD09 to GCJ02. Applied everywhere, no regional check.
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

/// WGS84 to BD09 through GCJ02
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> (f64, f64) {
    let (gcj_lon, gcj_lat) = wgs84_to_gcj02(lon, lat);
    gcj02_to_bd09(gcj_lon, gcj_lat)
}

/// BD09 to WGS84 through GCJ02
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> (f64, f64) {
    let (gcj_lon, gcj_lat) = bd09_to_gcj02(lon, lat);
    gcj02_to_wgs84(gcj_lon, gcj_lat)
}

/// Convert a coordinate between any two supported systems
pub fn convert(coordinate: Coordinate, from: CoordinateSystem, to: CoordinateSystem) -> Coordinate {
    use CoordinateSystem::*;

    let (lon, lat) = coordinate.as_tuple();
    let converted = match (from, to) {
        (WGS84, GCJ02) => wgs84_to_gcj02(lon, lat),
        (GCJ02, WGS84) => gcj02_to_wgs84(lon, lat),
        (GCJ02, BD09) => gcj02_to_bd09(lon, lat),
        (BD09, GCJ02) => bd09_to_gcj02(lon, lat),
        (WGS84, BD09) => wgs84_to_bd09(lon, lat),
        (BD09, WGS84) => bd09_to_wgs84(lon, lat),
        (WGS84, WGS84) | (GCJ02, GCJ02) | (BD09, BD09) => (lon, lat),
    };
    Coordinate::from(converted)
}
