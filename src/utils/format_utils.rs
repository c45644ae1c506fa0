//! Output formatting

use crate::azimuth::{Resolution, ReversalCheck};
use crate::coordinate::LineSegment;

/// Azimuth as printed by the CLI, always with a decimal point ("45.0", "198.43")
pub fn format_azimuth(azimuth: f64) -> String {
    format!("{:?}", azimuth)
}

/// Multi-line description of a resolution for verbose output
pub fn format_resolution(segment: &LineSegment, resolution: &Resolution) -> String {
    let mut result = String::new();
    result.push_str(&format!("Start: {}\n", segment.start));
    result.push_str(&format!("End: {}\n", segment.end));
    result.push_str(&format!("dx: {}, dy: {}\n", segment.dx(), segment.dy()));
    result.push_str(&format!("Raw bearing: {}\n", resolution.raw_bearing));
    result.push_str(&format!("Leans toward: {}\n", resolution.sector));
    result.push_str(&format!("Azimuth: {}", format_azimuth(resolution.azimuth)));
    result
}

/// Description of a reversal check
pub fn format_reversal(check: &ReversalCheck) -> String {
    format!(
        "Forward: {}\nReversed: {}\nRelation: {}",
        format_azimuth(check.forward),
        format_azimuth(check.reversed),
        check.relation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_azimuth() {
        assert_eq!(format_azimuth(45.0), "45.0");
        assert_eq!(format_azimuth(198.43), "198.43");
        assert_eq!(format_azimuth(0.0), "0.0");
    }
}
