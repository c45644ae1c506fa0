//! Argument extraction shared by the commands

use clap::ArgMatches;

use crate::azimuth::errors::{LineAziError, LineAziResult};
use crate::config::Settings;
use crate::coordinate::LineSegment;
use crate::utils::coordinate_utils::{parse_point, parse_round_digits};

/// Segment and rounding precision read from the command line
pub(crate) struct SegmentArgs {
    pub segment: LineSegment,
    pub round_digits: u32,
}

impl SegmentArgs {
    /// Read `--start`, `--end` and `--round`, falling back to `settings` for the precision
    pub fn from_matches(args: &ArgMatches, settings: &Settings) -> LineAziResult<Self> {
        let start_str = args.get_one::<String>("start")
            .ok_or_else(|| LineAziError::GenericError("Missing start point".to_string()))?;
        let end_str = args.get_one::<String>("end")
            .ok_or_else(|| LineAziError::GenericError("Missing end point".to_string()))?;

        let start = parse_point(start_str, "start")?;
        let end = parse_point(end_str, "end")?;

        let round_digits = match args.get_one::<String>("round") {
            Some(digits) => parse_round_digits(digits)?,
            None => settings.round_digits,
        };

        Ok(SegmentArgs {
            segment: LineSegment::new(start, end),
            round_digits,
        })
    }
}
