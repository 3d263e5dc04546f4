//! Coordinate system identifiers

use std::fmt;

use crate::errors::{ToolkitError, ToolkitResult};

/// The geodetic coordinate systems used by Chinese web maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// WGS 84, the GPS-native global reference system
    WGS84,
    /// GCJ-02, the state-mandated offset system used inside mainland China
    GCJ02,
    /// BD-09, Baidu's further offset derived from GCJ-02
    BD09,
}

impl CoordinateSystem {
    /// All supported systems
    pub const ALL: [CoordinateSystem; 3] = [
        CoordinateSystem::WGS84,
        CoordinateSystem::GCJ02,
        CoordinateSystem::BD09,
    ];

    /// Parse a coordinate system from a name such as "wgs84", "gcj02" or "baidu"
    pub fn from_name(name: &str) -> ToolkitResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "wgs84" | "wgs-84" | "gps" => Ok(CoordinateSystem::WGS84),
            "gcj02" | "gcj-02" | "mars" => Ok(CoordinateSystem::GCJ02),
            "bd09" | "bd-09" | "baidu" => Ok(CoordinateSystem::BD09),
            other => Err(ToolkitError::InvalidInput(format!(
                "Unknown coordinate system: {} (expected wgs84, gcj02 or bd09)", other
            ))),
        }
    }

    /// Short canonical name
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::WGS84 => "WGS84",
            CoordinateSystem::GCJ02 => "GCJ02",
            CoordinateSystem::BD09 => "BD09",
        }
    }

    /// Human-readable name with the map providers using it, for command logs
    pub fn description(&self) -> &'static str {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (GPS)",
            CoordinateSystem::GCJ02 => "GCJ-02 (AMap, Tencent, Google China)",
            CoordinateSystem::BD09 => "BD-09 (Baidu Maps)",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
