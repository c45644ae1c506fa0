//! Relation between the azimuths of a segment and its reverse

use std::fmt;
use log::debug;

use crate::azimuth::calculator::AzimuthCalculator;
use crate::coordinate::LineSegment;

/// Differences below this many degrees count as equal
const ANGLE_TOLERANCE: f64 = 1e-9;

/// How the azimuth changes when start and end are swapped
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReversalRelation {
    /// Both orders give the same azimuth
    Invariant,
    /// The azimuths differ by exactly 180° (mod 360)
    Opposite,
    /// Any other difference, in degrees (reversed minus forward, mod 360)
    Other(f64),
}

/// Azimuths computed for both orders of a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReversalCheck {
    pub forward: f64,
    pub reversed: f64,
    pub relation: ReversalRelation,
}

impl fmt::Display for ReversalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReversalRelation::Invariant => write!(f, "invariant"),
            ReversalRelation::Opposite => write!(f, "opposite (180° apart)"),
            ReversalRelation::Other(delta) => write!(f, "differs by {}°", delta),
        }
    }
}

/// Compute the azimuth of `segment` and of its reverse and classify the pair
pub fn compare_reversed(segment: &LineSegment, round_digits: u32) -> ReversalCheck {
    let calculator = AzimuthCalculator::new(round_digits);
    let forward = calculator.azimuth(segment);
    let reversed = calculator.azimuth(&segment.reversed());

    let delta = (reversed - forward).rem_euclid(360.0);
    let relation = if delta < ANGLE_TOLERANCE || 360.0 - delta < ANGLE_TOLERANCE {
        ReversalRelation::Invariant
    } else if (delta - 180.0).abs() < ANGLE_TOLERANCE {
        ReversalRelation::Opposite
    } else {
        ReversalRelation::Other(delta)
    };

    debug!("Reversal check: forward={}, reversed={}, {}", forward, reversed, relation);

    ReversalCheck { forward, reversed, relation }
}
