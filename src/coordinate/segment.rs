//! Ordered pair of points

use super::point::Point;

/// A line segment from `start` to `end`
///
/// The order matters for the sign of the deltas; the height comparison in
/// the azimuth calculation is relative to that same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    /// Create a segment from two points
    pub fn new(start: Point, end: Point) -> Self {
        LineSegment { start, end }
    }

    /// Create a segment from raw coordinates and heights
    pub fn from_coords(
        x_start: f64,
        y_start: f64,
        x_end: f64,
        y_end: f64,
        height_start: f64,
        height_end: f64,
    ) -> Self {
        LineSegment {
            start: Point::new(x_start, y_start, height_start),
            end: Point::new(x_end, y_end, height_end),
        }
    }

    /// Easting delta, end minus start
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Northing delta, end minus start
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// True when the start point is at least as high as the end point
    pub fn start_is_higher(&self) -> bool {
        self.start.height >= self.end.height
    }

    /// True when both endpoints share the same plan position
    pub fn is_degenerate(&self) -> bool {
        self.dx() == 0.0 && self.dy() == 0.0
    }

    /// The same segment with start and end swapped
    pub fn reversed(&self) -> Self {
        LineSegment {
            start: self.end,
            end: self.start,
        }
    }

    /// Check that both endpoints are made of finite numbers
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
