//! Lattice manager properties
//!
//! The per-document state the presentation layer reads and writes:
//! - whether a managed set is active
//! - whether new bindings reuse an existing lattice, and which one
//! - the lattice counter used for generated names
//! - the managed object list
//! - the per-lattice strength cache

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use latticekit_core::{clamp_strength, LATTICE_NAME_PREFIX, STRENGTH_MAX, STRENGTH_MIN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One object under management, identified by its scene name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObject {
    pub object_name: String,
}

impl ManagedObject {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
        }
    }
}

/// Cached strength of one lattice binding group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeData {
    pub lattice_name: String,
    strength: f32,
}

impl LatticeData {
    /// Creates an entry. `strength` is clamped to the field range.
    pub fn new(lattice_name: impl Into<String>, strength: f32) -> Self {
        Self {
            lattice_name: lattice_name.into(),
            strength: clamp_strength(strength),
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Sets the strength, clamped to the field range. Returns the stored
    /// value.
    pub fn set_strength(&mut self, value: f32) -> f32 {
        self.strength = clamp_strength(value);
        self.strength
    }
}

/// Lattice manager properties for one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerProperties {
    /// A managed set is active
    pub is_managing: bool,
    /// Bind to `lattice_object` instead of creating a new lattice
    pub use_existing_lattice: bool,
    /// Existing lattice to bind to; must name a lattice-type object
    pub lattice_object: Option<String>,
    /// Number of lattices created so far; only ever increases
    lattice_count: u32,
    /// Objects under management, unique by name
    pub managed_objects: Vec<ManagedObject>,
    /// Per-lattice strength cache, rebuilt after every structural change
    pub lattice_data: Vec<LatticeData>,
}

impl ManagerProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lattice_count(&self) -> u32 {
        self.lattice_count
    }

    /// Advances the lattice counter and returns the name for the new
    /// lattice (`"Lattice {n}"`).
    pub fn next_lattice_name(&mut self) -> String {
        self.lattice_count += 1;
        format!("{} {}", LATTICE_NAME_PREFIX, self.lattice_count)
    }

    /// Adds an object to the managed list. Returns `false` if it was already
    /// managed.
    pub fn add_managed(&mut self, object_name: impl Into<String>) -> bool {
        let object_name = object_name.into();
        if self.is_managed(&object_name) {
            return false;
        }
        self.managed_objects.push(ManagedObject::new(object_name));
        true
    }

    pub fn is_managed(&self, object_name: &str) -> bool {
        self.managed_objects
            .iter()
            .any(|m| m.object_name == object_name)
    }

    pub fn clear_managed(&mut self) {
        self.managed_objects.clear();
    }

    /// Managed object names in insertion order.
    pub fn managed_names(&self) -> Vec<String> {
        self.managed_objects
            .iter()
            .map(|m| m.object_name.clone())
            .collect()
    }

    pub fn lattice_data(&self, lattice_name: &str) -> Option<&LatticeData> {
        self.lattice_data
            .iter()
            .find(|d| d.lattice_name == lattice_name)
    }

    pub fn lattice_data_mut(&mut self, lattice_name: &str) -> Option<&mut LatticeData> {
        self.lattice_data
            .iter_mut()
            .find(|d| d.lattice_name == lattice_name)
    }

    /// Validate properties
    pub fn validate(&self) -> SettingsResult<()> {
        if let Some(name) = &self.lattice_object {
            if name.is_empty() {
                return Err(SettingsError::InvalidSetting {
                    key: "lattice_object".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for managed in &self.managed_objects {
            if managed.object_name.is_empty() {
                return Err(SettingsError::InvalidSetting {
                    key: "managed_objects".to_string(),
                    reason: "object name must not be empty".to_string(),
                });
            }
            if !seen.insert(managed.object_name.as_str()) {
                return Err(duplicate("managed_objects", &managed.object_name).into());
            }
        }

        let mut seen = HashSet::new();
        for data in &self.lattice_data {
            if !seen.insert(data.lattice_name.as_str()) {
                return Err(duplicate("lattice_data", &data.lattice_name).into());
            }
            check_strength(data)?;
        }

        Ok(())
    }
}

fn duplicate(key: &str, name: &str) -> ConfigError {
    ConfigError::DuplicateEntry {
        key: key.to_string(),
        name: name.to_string(),
    }
}

fn check_strength(data: &LatticeData) -> ConfigResult<()> {
    if !(STRENGTH_MIN..=STRENGTH_MAX).contains(&data.strength) {
        return Err(ConfigError::ValueOutOfRange {
            key: format!("lattice_data.{}.strength", data.lattice_name),
            value: data.strength.to_string(),
        });
    }
    Ok(())
}
