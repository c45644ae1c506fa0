//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::azimuth::errors::LineAziResult;
use crate::config::Settings;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// The text to print on success, or an error
    fn execute(&self) -> LineAziResult<String>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Settings from the built-in defaults and config file
    /// * `logger` - Session logger for recording measurements
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, settings: &Settings, logger: &'a Logger) -> LineAziResult<Box<dyn Command + 'a>>;
}
