//! Tests for raw bearings and sectors

extern crate std;

use crate::azimuth::bearing::RawBearing;
use crate::azimuth::sector::Sector;

#[test]
fn test_zero_dy_is_undefined() {
    std::assert_eq!(RawBearing::of(10.0, 0.0), RawBearing::VerticalLine);
    std::assert_eq!(RawBearing::of(-10.0, -0.0), RawBearing::VerticalLine);
    std::assert_eq!(RawBearing::of(0.0, 0.0), RawBearing::VerticalLine);
    std::assert_eq!(RawBearing::VerticalLine.angle(), None);
}

#[test]
fn test_defined_bearing_range() {
    let angle = RawBearing::of(10.0, 10.0).angle().unwrap();
    std::assert!((angle - 45.0).abs() < 1e-12);

    let angle = RawBearing::of(10.0, -10.0).angle().unwrap();
    std::assert!((angle + 45.0).abs() < 1e-12);

    let steep = RawBearing::of(1.0e6, 1.0e-6).angle().unwrap();
    std::assert!(steep < 90.0 && steep > 89.0);
}

#[test]
fn test_north_south_bearing_is_zero() {
    std::assert_eq!(RawBearing::of(0.0, 5.0).angle(), Some(0.0));
    // -0.0 compares equal to zero
    std::assert!(RawBearing::of(0.0, -5.0).angle().unwrap() == 0.0);
}

#[test]
fn test_sector_from_azimuth() {
    std::assert_eq!(Sector::from_azimuth(0.0), Sector::North);
    std::assert_eq!(Sector::from_azimuth(45.0), Sector::NorthEast);
    std::assert_eq!(Sector::from_azimuth(90.0), Sector::East);
    std::assert_eq!(Sector::from_azimuth(135.0), Sector::SouthEast);
    std::assert_eq!(Sector::from_azimuth(180.0), Sector::South);
    std::assert_eq!(Sector::from_azimuth(225.0), Sector::SouthWest);
    std::assert_eq!(Sector::from_azimuth(270.0), Sector::West);
    std::assert_eq!(Sector::from_azimuth(359.9), Sector::NorthWest);
    std::assert_eq!(Sector::from_azimuth(360.0), Sector::North);
    std::assert_eq!(Sector::from_azimuth(-90.0), Sector::West);
}

#[test]
fn test_sector_display() {
    std::assert_eq!(Sector::SouthWest.to_string(), "south-west (SW)");
    std::assert_eq!(Sector::North.abbreviation(), "N");
}
