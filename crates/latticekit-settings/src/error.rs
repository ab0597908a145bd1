//! Error types for the settings crate.
//!
//! This module provides structured error types for property validation and
//! document persistence.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The document file could not be loaded.
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// The document file could not be saved.
    #[error("Failed to save document: {0}")]
    SaveError(String),

    /// A property value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to property validation and file formats.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document file format is not supported.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of its valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// The same name appears twice where names must be unique.
    #[error("Duplicate entry in '{key}': {name}")]
    DuplicateEntry { key: String, name: String },

    /// The document was written by a newer, incompatible version.
    #[error("Unsupported document version {found} (expected at most {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::LoadError("file not found".to_string());
        assert_eq!(err.to_string(), "Failed to load document: file not found");

        let err = SettingsError::InvalidSetting {
            key: "lattice_object".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'lattice_object': must not be empty"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported document format: yaml");

        let err = ConfigError::DuplicateEntry {
            key: "managed_objects".to_string(),
            name: "Cube".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate entry in 'managed_objects': Cube");
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::UnsupportedFormat("yaml".to_string());
        let settings_err: SettingsError = config_err.into();
        assert!(matches!(settings_err, SettingsError::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let settings_err: SettingsError = io_err.into();
        assert!(matches!(settings_err, SettingsError::IoError(_)));
    }
}
