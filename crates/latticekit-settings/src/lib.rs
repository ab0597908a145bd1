//! LatticeKit Settings Crate
//!
//! Handles the persisted lattice manager properties and the document file
//! they are saved in.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{LatticeData, ManagedObject, ManagerProperties};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::{default_document_path, DocumentFile, FileFormat, FORMAT_VERSION};
