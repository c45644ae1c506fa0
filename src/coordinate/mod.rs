//! Coordinate handling for point-pair measurements
//!
//! Points live in a plane Cartesian system with north along +y and east
//! along +x. No projection or geodetic correction is applied.

mod point;
mod segment;

// Re-export key types
pub use self::point::Point;
pub use self::segment::LineSegment;
