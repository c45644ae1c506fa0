//! Raw planar bearing before quadrant correction

use std::fmt;
use log::trace;

/// Arctangent bearing of a segment, or the east-west case where it is undefined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawBearing {
    /// `degrees(atan(dx / dy))`, strictly inside (-90, 90)
    Defined(f64),
    /// `dy == 0`: the ratio has no value, magnitude 90° with unknown sign
    VerticalLine,
}

impl RawBearing {
    /// Classify a pair of deltas
    ///
    /// The zero test runs before the division, so no infinity or NaN is
    /// produced for east-west segments.
    pub fn of(dx: f64, dy: f64) -> Self {
        if dy == 0.0 {
            trace!("dy is zero, bearing undefined (dx={})", dx);
            return RawBearing::VerticalLine;
        }

        let angle = (dx / dy).atan().to_degrees();
        trace!("Raw bearing for dx={}, dy={}: {}", dx, dy, angle);
        RawBearing::Defined(angle)
    }

    /// The angle in degrees, if defined
    pub fn angle(&self) -> Option<f64> {
        match self {
            RawBearing::Defined(angle) => Some(*angle),
            RawBearing::VerticalLine => None,
        }
    }
}

impl fmt::Display for RawBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawBearing::Defined(angle) => write!(f, "{}°", angle),
            RawBearing::VerticalLine => write!(f, "undefined (dy = 0)"),
        }
    }
}
