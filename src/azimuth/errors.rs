//! Custom error types for azimuth processing

use std::fmt;
use std::io;

/// Errors raised by the input-facing layers (point parsing, configuration, CLI)
///
/// The azimuth computation itself never fails; these variants only cover
/// text that has to be turned into numbers first.
#[derive(Debug)]
pub enum LineAziError {
    /// I/O error
    IoError(io::Error),
    /// Point string that is not "x,y,height"
    InvalidPoint(String),
    /// NaN or infinite value in the named field
    NonFiniteValue(&'static str),
    /// Rounding digits that are not a non-negative integer
    InvalidRoundDigits(String),
    /// Malformed or wrongly typed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for LineAziError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAziError::IoError(e) => write!(f, "I/O error: {}", e),
            LineAziError::InvalidPoint(s) => write!(f, "Invalid point '{}', expected 'x,y,height'", s),
            LineAziError::NonFiniteValue(field) => write!(f, "Value for {} must be a finite number", field),
            LineAziError::InvalidRoundDigits(s) => write!(f, "Invalid rounding digits: {}", s),
            LineAziError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LineAziError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for LineAziError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineAziError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LineAziError {
    fn from(error: io::Error) -> Self {
        LineAziError::IoError(error)
    }
}

/// Result type for azimuth operations
pub type LineAziResult<T> = Result<T, LineAziError>;
