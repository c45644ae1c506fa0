//! Compass sectors

use std::fmt;

/// The eight compass directions a resolved azimuth can point toward
///
/// Axis-aligned results map to the cardinal variants; quadrant results map
/// to the intercardinal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Sector {
    /// Sector for an azimuth value in degrees
    ///
    /// Exact multiples of 90° are cardinal; anything else is the
    /// intercardinal quadrant it falls in. The value is normalized into
    /// [0, 360) first.
    pub fn from_azimuth(azimuth: f64) -> Self {
        let deg = azimuth.rem_euclid(360.0);
        if deg == 0.0 {
            Sector::North
        } else if deg < 90.0 {
            Sector::NorthEast
        } else if deg == 90.0 {
            Sector::East
        } else if deg < 180.0 {
            Sector::SouthEast
        } else if deg == 180.0 {
            Sector::South
        } else if deg < 270.0 {
            Sector::SouthWest
        } else if deg == 270.0 {
            Sector::West
        } else {
            Sector::NorthWest
        }
    }

    /// Short compass abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Sector::North => "N",
            Sector::NorthEast => "NE",
            Sector::East => "E",
            Sector::SouthEast => "SE",
            Sector::South => "S",
            Sector::SouthWest => "SW",
            Sector::West => "W",
            Sector::NorthWest => "NW",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Sector::North => "north",
            Sector::NorthEast => "north-east",
            Sector::East => "east",
            Sector::SouthEast => "south-east",
            Sector::South => "south",
            Sector::SouthWest => "south-west",
            Sector::West => "west",
            Sector::NorthWest => "north-west",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.abbreviation())
    }
}
