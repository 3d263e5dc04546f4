//! Coordinate pair in decimal degrees

use std::fmt;

use crate::errors::{ToolkitError, ToolkitResult};

/// A longitude/latitude pair in decimal degrees
///
/// No range validation is performed; physically meaningless values are
/// carried through the conversions unchanged in kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinate { lon, lat }
    }

    /// Parse a coordinate from a string (format: "lon,lat")
    pub fn from_string(coord_str: &str) -> ToolkitResult<Self> {
        let parts: Vec<&str> = coord_str.split(',').collect();
        if parts.len() != 2 {
            return Err(ToolkitError::InvalidInput(format!(
                "Coordinate must be 'lon,lat', got '{}'", coord_str
            )));
        }

        let lon = parts[0].trim().parse::<f64>()
            .map_err(|_| ToolkitError::InvalidInput(format!("Invalid longitude: {}", parts[0].trim())))?;
        let lat = parts[1].trim().parse::<f64>()
            .map_err(|_| ToolkitError::InvalidInput(format!("Invalid latitude: {}", parts[1].trim())))?;

        Ok(Coordinate::new(lon, lat))
    }

    /// The coordinate as a (lon, lat) tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Coordinate::new(lon, lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}
