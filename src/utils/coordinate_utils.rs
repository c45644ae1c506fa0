//! Coordinate utility functions
//!
//! Parsing of point specifications given on the command line.

use log::debug;

use crate::azimuth::errors::{LineAziError, LineAziResult};
use crate::coordinate::Point;

/// Parse a point given as "x,y,height"
///
/// Whitespace around each component is ignored. Every component must be a
/// finite number.
///
/// # Arguments
/// * `point_str` - Point string, e.g. "512.3,1040.8,22.5"
/// * `label` - Which point this is ("start" or "end"), used in error messages
///
/// # Returns
/// The parsed point or an error
pub fn parse_point(point_str: &str, label: &'static str) -> LineAziResult<Point> {
    let parts: Vec<&str> = point_str.split(',').collect();
    if parts.len() != 3 {
        return Err(LineAziError::InvalidPoint(point_str.to_string()));
    }

    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(parts.iter()) {
        *slot = part.trim().parse::<f64>()
            .map_err(|_| LineAziError::InvalidPoint(point_str.to_string()))?;
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err(LineAziError::NonFiniteValue(label));
    }

    debug!("Parsed {} point: x={}, y={}, height={}", label, values[0], values[1], values[2]);

    Ok(Point::new(values[0], values[1], values[2]))
}

/// Parse a rounding precision
pub fn parse_round_digits(digits_str: &str) -> LineAziResult<u32> {
    digits_str.trim().parse::<u32>()
        .map_err(|_| LineAziError::InvalidRoundDigits(digits_str.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let point = parse_point(" 1.5, -2 ,100", "start").unwrap();
        assert_eq!(point, Point::new(1.5, -2.0, 100.0));
    }

    #[test]
    fn test_parse_point_wrong_arity() {
        assert!(matches!(parse_point("1,2", "start"), Err(LineAziError::InvalidPoint(_))));
        assert!(matches!(parse_point("1,2,3,4", "end"), Err(LineAziError::InvalidPoint(_))));
    }

    #[test]
    fn test_parse_point_not_a_number() {
        assert!(matches!(parse_point("1,north,3", "end"), Err(LineAziError::InvalidPoint(_))));
    }

    #[test]
    fn test_parse_point_rejects_nan() {
        assert!(matches!(parse_point("1,NaN,3", "end"), Err(LineAziError::NonFiniteValue("end"))));
        assert!(matches!(parse_point("inf,0,3", "start"), Err(LineAziError::NonFiniteValue("start"))));
    }

    #[test]
    fn test_parse_round_digits() {
        assert_eq!(parse_round_digits("2").unwrap(), 2);
        assert!(parse_round_digits("-1").is_err());
        assert!(parse_round_digits("two").is_err());
    }
}
