pub mod azimuth;
pub mod coordinate;
pub mod config;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::LineAzi;

pub use azimuth::{compute_azimuth, AzimuthCalculator, LineAziError, LineAziResult, RawBearing, Resolution, Sector};
pub use coordinate::{LineSegment, Point};
