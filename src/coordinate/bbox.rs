//! Bounding box used for the regional offset check

/// A bounding box in decimal degrees, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum longitude
    pub min_x: f64,
    /// Minimum latitude
    pub min_y: f64,
    /// Maximum longitude
    pub max_x: f64,
    /// Maximum latitude
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Check if this bounding box contains a point
    ///
    /// Edges count as inside. Any NaN coordinate is outside, since every
    /// ordered comparison against NaN is false.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x &&
            y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 5.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(10.0, 5.0));
        assert!(bbox.contains(3.0, 2.0));
        assert!(!bbox.contains(10.000001, 2.0));
        assert!(!bbox.contains(3.0, -0.000001));
    }

    #[test]
    fn test_nan_is_outside() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 5.0);
        assert!(!bbox.contains(f64::NAN, 2.0));
        assert!(!bbox.contains(2.0, f64::NAN));
    }
}
