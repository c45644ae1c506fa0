//! Azimuth calculation with height-based lean resolution
//!
//! A segment in the plane has two bearings 180° apart. The one reported here
//! points toward the side the line leans, taking the start point as the
//! higher end whenever the heights are equal.

use log::{debug, warn};

use crate::azimuth::bearing::RawBearing;
use crate::azimuth::errors::{LineAziError, LineAziResult};
use crate::azimuth::rounding::round_to;
use crate::azimuth::sector::Sector;
use crate::coordinate::LineSegment;

/// Detailed outcome of one azimuth computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Azimuth in degrees, clockwise from north
    pub azimuth: f64,
    /// Bearing before quadrant correction
    pub raw_bearing: RawBearing,
    /// Compass sector selected by the quadrant correction
    pub sector: Sector,
}

/// Stateless azimuth calculator carrying the caller's rounding precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AzimuthCalculator {
    /// Decimal places kept by the rounding branches
    pub round_digits: u32,
}

impl AzimuthCalculator {
    /// Create a calculator rounding to `round_digits` decimal places
    pub fn new(round_digits: u32) -> Self {
        AzimuthCalculator { round_digits }
    }

    /// Azimuth of a segment in degrees
    pub fn azimuth(&self, segment: &LineSegment) -> f64 {
        self.resolve(segment).azimuth
    }

    /// Azimuth of a segment together with its raw bearing and sector
    ///
    /// Quadrant correction table, with `higher = start.height >= end.height`:
    ///
    /// | raw bearing | dx    | higher | azimuth             |
    /// |-------------|-------|--------|---------------------|
    /// | > 0         | > 0   | yes    | round(raw, 0)       |
    /// | > 0         | > 0   | no     | round(180 + raw, r) |
    /// | > 0         | <= 0  | yes    | round(180 + raw, r) |
    /// | > 0         | <= 0  | no     | round(raw, 0)       |
    /// | < 0         | > 0   | yes    | round(180 + raw, r) |
    /// | < 0         | > 0   | no     | round(360 + raw, r) |
    /// | < 0         | <= 0  | yes    | round(360 + raw, r) |
    /// | < 0         | <= 0  | no     | round(180 + raw, r) |
    /// | == 0        | dy>0  | yes/no | 0 / 180             |
    /// | == 0        | dy<=0 | yes/no | 180 / 0             |
    /// | undefined   | > 0   | yes/no | 90 / 270            |
    /// | undefined   | <= 0  | yes/no | 270 / 90            |
    ///
    /// The two `round(raw, 0)` rows always round to whole degrees, whatever
    /// `round_digits` is. Existing outputs depend on that, so it stays.
    pub fn resolve(&self, segment: &LineSegment) -> Resolution {
        let dx = segment.dx();
        let dy = segment.dy();
        let higher = segment.start_is_higher();
        let r = self.round_digits;

        if segment.is_degenerate() {
            warn!("Start and end share the same position {}, azimuth is arbitrary", segment.start);
        }

        let raw_bearing = RawBearing::of(dx, dy);

        let (azimuth, sector) = match raw_bearing {
            RawBearing::Defined(angle) if angle > 0.0 => {
                if (dx > 0.0) == higher {
                    (round_to(angle, 0), Sector::NorthEast)
                } else {
                    (round_to(180.0 + angle, r), Sector::SouthWest)
                }
            }
            RawBearing::Defined(angle) if angle < 0.0 => {
                if (dx > 0.0) == higher {
                    (round_to(180.0 + angle, r), Sector::SouthEast)
                } else {
                    (round_to(360.0 + angle, r), Sector::NorthWest)
                }
            }
            RawBearing::Defined(angle) if angle == 0.0 => {
                if (dy > 0.0) == higher {
                    (0.0, Sector::North)
                } else {
                    (180.0, Sector::South)
                }
            }
            RawBearing::Defined(angle) => {
                // NaN from non-finite input falls through every comparison
                warn!("Raw bearing is not a number (dx={}, dy={})", dx, dy);
                (angle, Sector::North)
            }
            RawBearing::VerticalLine => {
                if (dx > 0.0) == higher {
                    (90.0, Sector::East)
                } else {
                    (270.0, Sector::West)
                }
            }
        };

        debug!("Azimuth for {} -> {}: {} [{}], raw bearing {}",
               segment.start, segment.end, azimuth, sector.abbreviation(), raw_bearing);

        Resolution { azimuth, raw_bearing, sector }
    }

    /// Like [`resolve`](Self::resolve), but rejects NaN and infinite inputs
    pub fn checked_resolve(&self, segment: &LineSegment) -> LineAziResult<Resolution> {
        validate_segment(segment)?;
        Ok(self.resolve(segment))
    }
}

/// Ensure every coordinate and height of the segment is finite
pub fn validate_segment(segment: &LineSegment) -> LineAziResult<()> {
    if segment.is_finite() {
        return Ok(());
    }

    // Name the first offending field
    let fields = [
        ("x_start", segment.start.x),
        ("y_start", segment.start.y),
        ("height_start", segment.start.height),
        ("x_end", segment.end.x),
        ("y_end", segment.end.y),
        ("height_end", segment.end.height),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            return Err(LineAziError::NonFiniteValue(name));
        }
    }

    Ok(())
}

/// Azimuth of the line from (x_start, y_start) to (x_end, y_end), pointing
/// toward the side it leans given the endpoint heights
///
/// x grows east and y grows north. `round_digits` sets the decimal places of
/// the rounding branches; pass 0 for whole degrees.
///
/// ```
/// use lineazi::compute_azimuth;
///
/// assert_eq!(compute_azimuth(0.0, 0.0, 10.0, 10.0, 100.0, 50.0, 0), 45.0);
/// assert_eq!(compute_azimuth(0.0, 0.0, 10.0, 10.0, 50.0, 100.0, 0), 225.0);
/// assert_eq!(compute_azimuth(0.0, 0.0, 10.0, 0.0, 100.0, 50.0, 0), 90.0);
/// ```
pub fn compute_azimuth(
    x_start: f64,
    y_start: f64,
    x_end: f64,
    y_end: f64,
    height_start: f64,
    height_end: f64,
    round_digits: u32,
) -> f64 {
    let segment = LineSegment::from_coords(x_start, y_start, x_end, y_end, height_start, height_end);
    AzimuthCalculator::new(round_digits).azimuth(&segment)
}
