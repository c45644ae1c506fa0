//! Runtime settings loaded from TOML
//!
//! Built-in defaults come from `lineazi_defaults.toml`, embedded at compile
//! time. A user file overrides them key by key.

use std::fs;
use lazy_static::lazy_static;
use log::{debug, warn};
use crate::azimuth::errors::{LineAziError, LineAziResult};

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_SETTINGS: Settings = {
        let content = include_str!("../../lineazi_defaults.toml");
        Settings::builtin().merge_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse built-in settings: {}", e);
                Settings::builtin()
            })
    };
}

/// Settings shared by the command-line tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Decimal places kept by the rounding branches
    pub round_digits: u32,
    /// Print raw bearing and sector next to the azimuth
    pub verbose: bool,
    /// Session log file, if any
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS.clone()
    }
}

impl Settings {
    /// Hard-coded fallback used when the embedded file cannot be read
    fn builtin() -> Self {
        Settings {
            round_digits: 0,
            verbose: false,
            log_file: None,
        }
    }

    /// Overlay the keys present in a TOML document on top of these settings
    pub fn merge_str(mut self, content: &str) -> LineAziResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(LineAziError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        if let Some(output) = toml_value.get("output").and_then(|v| v.as_table()) {
            if let Some(value) = output.get("round_digits") {
                let digits = value.as_integer()
                    .ok_or_else(|| LineAziError::ConfigError("output.round_digits must be an integer".to_string()))?;
                self.round_digits = u32::try_from(digits)
                    .map_err(|_| LineAziError::InvalidRoundDigits(digits.to_string()))?;
            }

            if let Some(value) = output.get("verbose") {
                self.verbose = value.as_bool()
                    .ok_or_else(|| LineAziError::ConfigError("output.verbose must be a boolean".to_string()))?;
            }
        }

        if let Some(logging) = toml_value.get("logging").and_then(|v| v.as_table()) {
            if let Some(value) = logging.get("log_file") {
                let path = value.as_str()
                    .ok_or_else(|| LineAziError::ConfigError("logging.log_file must be a string".to_string()))?;
                self.log_file = if path.trim().is_empty() { None } else { Some(path.to_string()) };
            }
        }

        for key in ignored_keys(&toml_value) {
            warn!("Ignoring unknown setting '{}'", key);
        }

        Ok(self)
    }

    /// Load settings from a TOML file, starting from the built-in defaults
    pub fn from_file(path: &str) -> LineAziResult<Self> {
        debug!("Loading settings from {}", path);
        let contents = fs::read_to_string(path)?;

        Settings::default().merge_str(&contents)
    }
}

/// Keys of a settings document that no setting reads, as dotted paths
fn ignored_keys(toml_value: &toml::Value) -> Vec<String> {
    let mut ignored = Vec::new();
    let Some(root) = toml_value.as_table() else {
        return ignored;
    };

    for (section, value) in root {
        let known: &[&str] = match section.as_str() {
            "output" => &["round_digits", "verbose"],
            "logging" => &["log_file"],
            _ => {
                ignored.push(section.clone());
                continue;
            }
        };

        if let Some(table) = value.as_table() {
            for key in table.keys() {
                if !known.contains(&key.as_str()) {
                    ignored.push(format!("{}.{}", section, key));
                }
            }
        }
    }

    ignored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.round_digits, 0);
        assert!(!settings.verbose);
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::default()
            .merge_str("[output]\nround_digits = 3\n")
            .unwrap();
        assert_eq!(settings.round_digits, 3);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_log_file_override() {
        let settings = Settings::default()
            .merge_str("[logging]\nlog_file = \"survey.log\"\n")
            .unwrap();
        assert_eq!(settings.log_file.as_deref(), Some("survey.log"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "[output]\nround_digit = 3\nverbose = true\n[extra]\na = 1\n";
        let settings = Settings::default().merge_str(content).unwrap();
        assert_eq!(settings.round_digits, 0);
        assert!(settings.verbose);

        let value: toml::Value = content.parse().unwrap();
        let mut ignored = ignored_keys(&value);
        ignored.sort();
        assert_eq!(ignored, vec!["extra".to_string(), "output.round_digit".to_string()]);
    }

    #[test]
    fn test_known_keys_are_not_reported() {
        let value: toml::Value = include_str!("../../lineazi_defaults.toml").parse().unwrap();
        assert!(ignored_keys(&value).is_empty());
    }

    #[test]
    fn test_rejects_negative_digits() {
        let result = Settings::default().merge_str("[output]\nround_digits = -1\n");
        assert!(matches!(result, Err(LineAziError::InvalidRoundDigits(_))));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let result = Settings::default().merge_str("[output]\nverbose = \"yes\"\n");
        assert!(matches!(result, Err(LineAziError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = Settings::default().merge_str("[output\nround_digits = 1");
        assert!(matches!(result, Err(LineAziError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file("does/not/exist/lineazi.toml");
        assert!(matches!(result, Err(LineAziError::IoError(_))));
    }
}
