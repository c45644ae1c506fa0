//! Azimuth of a single measured segment

use clap::ArgMatches;
use log::{debug, info};

use crate::azimuth::AzimuthCalculator;
use crate::azimuth::errors::LineAziResult;
use crate::commands::command_traits::Command;
use crate::commands::segment_args::SegmentArgs;
use crate::config::Settings;
use crate::coordinate::LineSegment;
use crate::utils::format_utils::{format_azimuth, format_resolution};
use crate::utils::logger::Logger;

/// Command computing the azimuth of one segment
pub struct AzimuthCommand<'a> {
    /// Segment to measure
    segment: LineSegment,
    /// Decimal places for the rounding branches
    round_digits: u32,
    /// Whether to print raw bearing and sector as well
    verbose: bool,
    /// Session logger
    logger: &'a Logger,
}

impl<'a> AzimuthCommand<'a> {
    /// Create a new azimuth command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Defaults for options not given on the command line
    /// * `logger` - Session logger
    ///
    /// # Returns
    /// A new AzimuthCommand instance or an error
    pub fn new(args: &ArgMatches, settings: &Settings, logger: &'a Logger) -> LineAziResult<Self> {
        let SegmentArgs { segment, round_digits } = SegmentArgs::from_matches(args, settings)?;
        let verbose = args.get_flag("verbose") || settings.verbose;

        Ok(AzimuthCommand {
            segment,
            round_digits,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for AzimuthCommand<'a> {
    fn execute(&self) -> LineAziResult<String> {
        debug!("Computing azimuth with {} decimal places", self.round_digits);

        let calculator = AzimuthCalculator::new(self.round_digits);
        let resolution = calculator.checked_resolve(&self.segment)?;

        self.logger.log_measurement(&self.segment, self.round_digits, &resolution)?;
        info!("Azimuth {} ({})", resolution.azimuth, resolution.sector.abbreviation());

        if self.verbose {
            Ok(format_resolution(&self.segment, &resolution))
        } else {
            Ok(format_azimuth(resolution.azimuth))
        }
    }
}
