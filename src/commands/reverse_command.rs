//! Reversal check: azimuth for both orders of the same segment

use clap::ArgMatches;
use log::info;

use crate::azimuth::{compare_reversed, validate_segment};
use crate::azimuth::errors::LineAziResult;
use crate::commands::command_traits::Command;
use crate::commands::segment_args::SegmentArgs;
use crate::config::Settings;
use crate::coordinate::LineSegment;
use crate::utils::format_utils::format_reversal;
use crate::utils::logger::Logger;

/// Command comparing the azimuth of a segment with that of its reverse
pub struct ReverseCommand<'a> {
    segment: LineSegment,
    round_digits: u32,
    logger: &'a Logger,
}

impl<'a> ReverseCommand<'a> {
    /// Create a new reversal command from CLI arguments
    pub fn new(args: &ArgMatches, settings: &Settings, logger: &'a Logger) -> LineAziResult<Self> {
        let SegmentArgs { segment, round_digits } = SegmentArgs::from_matches(args, settings)?;

        Ok(ReverseCommand {
            segment,
            round_digits,
            logger,
        })
    }
}

impl<'a> Command for ReverseCommand<'a> {
    fn execute(&self) -> LineAziResult<String> {
        validate_segment(&self.segment)?;

        let check = compare_reversed(&self.segment, self.round_digits);
        info!("Reversal relation: {}", check.relation);

        self.logger.log_reversal(&self.segment, self.round_digits)?;

        Ok(format_reversal(&check))
    }
}
