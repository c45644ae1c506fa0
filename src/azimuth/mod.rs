//! Azimuth computation
//!
//! This module turns a pair of measured points into the compass azimuth of
//! the line between them, choosing the bearing that points toward the lower
//! endpoint.

pub mod errors;
pub mod bearing;
pub mod calculator;
pub mod rounding;
pub mod sector;
pub mod reversal;
#[cfg(test)]
mod tests;

pub use bearing::RawBearing;
pub use calculator::{compute_azimuth, validate_segment, AzimuthCalculator, Resolution};
pub use errors::{LineAziError, LineAziResult};
pub use reversal::{compare_reversed, ReversalCheck, ReversalRelation};
pub use rounding::round_to;
pub use sector::Sector;
