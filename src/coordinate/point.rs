//! Point structure for representing measured positions

use std::fmt;

/// A measured point in a plane Cartesian system
///
/// x grows to the east, y grows to the north, and `height` is the elevation
/// used to decide which way a line leans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (easting)
    pub x: f64,
    /// Y coordinate (northing)
    pub y: f64,
    /// Elevation of the point
    pub height: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64, height: f64) -> Self {
        Point { x, y, height }
    }

    /// Check that every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, h={})", self.x, self.y, self.height)
    }
}
