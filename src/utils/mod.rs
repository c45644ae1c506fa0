//! Utility modules for common functionality
//!
//! This module provides the session logger, input parsing and output
//! formatting used by the commands.

pub mod logger;
pub mod coordinate_utils;
pub mod format_utils;
