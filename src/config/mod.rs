//! Configuration for the command-line tool

pub mod settings;

pub use settings::Settings;
