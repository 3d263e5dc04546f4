//! Coordinate conversion between WGS84, GCJ02 and BD09
//!
//! This module provides the closed-form offset formulas used by Chinese
//! web maps. Everything here is a stateless pure function over `f64`.

mod bbox;
mod point;
mod crs;
mod transform;
mod batch;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Coordinate;
pub use self::crs::CoordinateSystem;
pub use self::transform::{
    bd09_to_gcj02, bd09_to_wgs84, convert, gcj02_to_bd09, gcj02_to_wgs84, is_in_china,
    wgs84_to_bd09, wgs84_to_gcj02, A, CHINA_BOUNDS, EE, X_PI,
};
pub use self::batch::{convert_lines, ConversionReport};
