//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod azimuth_command;
pub mod reverse_command;
mod segment_args;

pub use command_traits::{Command, CommandFactory};
pub use azimuth_command::AzimuthCommand;
pub use reverse_command::ReverseCommand;

use clap::ArgMatches;
use crate::azimuth::errors::LineAziResult;
use crate::config::Settings;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct LineAziCommandFactory;

impl LineAziCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        LineAziCommandFactory
    }
}

impl Default for LineAziCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for LineAziCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &Settings, logger: &'a Logger) -> LineAziResult<Box<dyn Command + 'a>> {
        if args.get_flag("compare-reversed") {
            Ok(Box::new(ReverseCommand::new(args, settings, logger)?))
        } else {
            // Default to the plain azimuth command
            Ok(Box::new(AzimuthCommand::new(args, settings, logger)?))
        }
    }
}
