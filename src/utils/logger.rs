//! Session logger for measurement records
//!
//! Diagnostics go through the `log` facade; this logger keeps a separate,
//! human-readable record of every measurement a run computed, optionally
//! written to a file.

use std::fs::OpenOptions;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::azimuth::{AzimuthCalculator, Resolution};
use crate::coordinate::LineSegment;

/// Append-only record of computed azimuths
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a logger appending to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, created if missing
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards every record
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Creates a file logger when a path is given, a disabled one otherwise
    pub fn from_option(log_file: Option<&str>) -> io::Result<Self> {
        match log_file {
            Some(path) => Logger::new(path),
            None => Ok(Logger::disabled()),
        }
    }

    /// Whether records end up anywhere
    pub fn is_enabled(&self) -> bool {
        match self.file.lock() {
            Ok(guard) => guard.is_some(),
            Err(_) => false,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs one computed measurement as a single tab-separated line
    ///
    /// # Arguments
    ///
    /// * `segment` - The measured segment
    /// * `round_digits` - Rounding precision the azimuth was computed with
    /// * `resolution` - The computed result
    pub fn log_measurement(&self, segment: &LineSegment, round_digits: u32, resolution: &Resolution) -> io::Result<()> {
        let message = format!(
            "{}\t{}\t{}\t{}\t{}\t{}\tr={}\t{:?}\t{}",
            segment.start.x, segment.start.y, segment.start.height,
            segment.end.x, segment.end.y, segment.end.height,
            round_digits, resolution.azimuth, resolution.sector.abbreviation()
        );
        self.log(&message)
    }

    /// Logs the measurement of a segment and of its reverse, one line each
    ///
    /// Nothing is computed when the logger is disabled.
    pub fn log_reversal(&self, segment: &LineSegment, round_digits: u32) -> io::Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let calculator = AzimuthCalculator::new(round_digits);
        let reversed = segment.reversed();
        self.log_measurement(segment, round_digits, &calculator.resolve(segment))?;
        self.log_measurement(&reversed, round_digits, &calculator.resolve(&reversed))
    }
}
