//! Document Persistence
//!
//! Loads and saves a document: the manager properties together with the
//! scene payload they refer to. The file format follows the extension
//! (`.json` or `.toml`). Properties are validated before every save and
//! after every load.

use crate::config::ManagerProperties;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current document format version.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk encoding of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => Err(ConfigError::UnsupportedFormat(
                "<no extension>".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// A saved document: manager properties plus the scene they describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile<S> {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    pub properties: ManagerProperties,
    pub scene: S,
}

impl<S> DocumentFile<S>
where
    S: Serialize + DeserializeOwned,
{
    /// Wraps properties and scene, stamping the current time.
    pub fn new(properties: ManagerProperties, scene: S) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            properties,
            scene,
        }
    }

    /// Load a document from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let document: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        if document.format_version > FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: document.format_version,
                supported: FORMAT_VERSION,
            }
            .into());
        }
        document.properties.validate()?;

        info!(
            "Loaded document {} ({}, saved {})",
            path.display(),
            format,
            document.saved_at
        );
        Ok(document)
    }

    /// Save the document to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let format = FileFormat::from_path(path)?;
        self.properties.validate()?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Saved document {} ({})", path.display(), format);
        Ok(())
    }
}

/// Default document location in the platform config directory.
pub fn default_document_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("latticekit").join("document.json"))
}
