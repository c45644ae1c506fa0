use log::info;

use crate::azimuth::errors::LineAziResult;
use crate::azimuth::{compare_reversed, validate_segment, AzimuthCalculator, ReversalCheck, Resolution};
use crate::coordinate::LineSegment;
use crate::utils::format_utils::format_resolution;
use crate::utils::logger::Logger;

/// Main interface to the lineazi library
///
/// Wraps the calculator with input validation and an optional session log.
/// For a bare number, [`compute_azimuth`](crate::compute_azimuth) is enough.
pub struct LineAzi {
    logger: Logger,
    round_digits: u32,
}

impl LineAzi {
    /// Create a new LineAzi instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path of a session log recording every measurement
    /// * `round_digits` - Decimal places for the rounding branches
    ///
    /// # Returns
    /// A LineAzi instance or an error if the log file cannot be opened
    pub fn new(log_file: Option<&str>, round_digits: u32) -> LineAziResult<Self> {
        let logger = Logger::from_option(log_file)?;
        Ok(LineAzi { logger, round_digits })
    }

    /// Azimuth of a segment in degrees
    ///
    /// # Returns
    /// The azimuth, or an error for non-finite input or a failed log write
    pub fn azimuth(&self, segment: &LineSegment) -> LineAziResult<f64> {
        Ok(self.resolve(segment)?.azimuth)
    }

    /// Azimuth together with raw bearing and compass sector
    pub fn resolve(&self, segment: &LineSegment) -> LineAziResult<Resolution> {
        let resolution = AzimuthCalculator::new(self.round_digits).checked_resolve(segment)?;
        self.logger.log_measurement(segment, self.round_digits, &resolution)?;
        Ok(resolution)
    }

    /// Human-readable report of one measurement
    pub fn describe(&self, segment: &LineSegment) -> LineAziResult<String> {
        let resolution = self.resolve(segment)?;
        Ok(format_resolution(segment, &resolution))
    }

    /// Compare the azimuth of a segment with that of its reverse
    ///
    /// Both orders are written to the session log.
    pub fn compare_reversed(&self, segment: &LineSegment) -> LineAziResult<ReversalCheck> {
        validate_segment(segment)?;
        let check = compare_reversed(segment, self.round_digits);
        self.logger.log_reversal(segment, self.round_digits)?;
        info!("Reversal check for {} -> {}: {}", segment.start, segment.end, check.relation);
        Ok(check)
    }
}
