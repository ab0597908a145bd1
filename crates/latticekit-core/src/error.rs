//! Error handling for LatticeKit
//!
//! Provides error types for both layers of the application:
//! - Scene errors (host scene-graph lookups and host-level operations)
//! - Manager errors (the managed-set and binding synchronization engine)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Represents failures reported by the scene-graph host: lookups that do not
/// resolve, type mismatches, and host-level operations such as baking a
/// modifier into mesh geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Object does not exist in the scene
    #[error("Object not found: {name}")]
    ObjectNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// Modifier does not exist on the object
    #[error("Modifier '{modifier}' not found on '{object}'")]
    ModifierNotFound {
        /// The object that was searched.
        object: String,
        /// The modifier name that failed to resolve.
        modifier: String,
    },

    /// Container does not exist in the scene
    #[error("Collection not found: {name}")]
    CollectionNotFound {
        /// The container name that failed to resolve.
        name: String,
    },

    /// Object exists but is not a lattice
    #[error("Object '{name}' is not a lattice")]
    NotALattice {
        /// The offending object name.
        name: String,
    },

    /// The host could not bake a modifier into geometry
    #[error("Failed to apply modifier '{modifier}' on '{object}': {reason}")]
    BakeFailed {
        /// The object carrying the modifier.
        object: String,
        /// The modifier being applied.
        modifier: String,
        /// The reason the bake failed.
        reason: String,
    },
}

/// Manager error type
///
/// Represents conditions raised by the lattice manager. None of these are
/// fatal: operators turn them into an informational report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManagerError {
    /// An operation that needs at least one object was given none
    #[error("{operation}: no objects to work on")]
    EmptyInput {
        /// The operation that was attempted.
        operation: String,
    },

    /// A managed object or binding name no longer resolves
    #[error("Stale {kind} reference: {name}")]
    StaleReference {
        /// What kind of entity was referenced (object, lattice, ...).
        kind: String,
        /// The name that no longer resolves.
        name: String,
    },

    /// No binding with this name exists on any managed object
    #[error("No lattice modifiers named '{name}'")]
    MissingGroup {
        /// The binding name that was looked up.
        name: String,
    },

    /// The operation needs an active managed set
    #[error("Not managing any objects")]
    NotManaging,

    /// An argument was rejected before any work was done
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// The reason the argument is invalid.
        reason: String,
    },
}

/// Main error type for LatticeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Manager error
    #[error(transparent)]
    Manager(#[from] ManagerError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Shorthand for [`ManagerError::EmptyInput`]
    pub fn empty_input(operation: impl Into<String>) -> Self {
        Error::Manager(ManagerError::EmptyInput {
            operation: operation.into(),
        })
    }

    /// Shorthand for [`ManagerError::MissingGroup`]
    pub fn missing_group(name: impl Into<String>) -> Self {
        Error::Manager(ManagerError::MissingGroup { name: name.into() })
    }

    /// Check if this is an empty input error
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::Manager(ManagerError::EmptyInput { .. }))
    }

    /// Check if this is a missing group error
    pub fn is_missing_group(&self) -> bool {
        matches!(self, Error::Manager(ManagerError::MissingGroup { .. }))
    }

    /// Check if this is a stale reference error
    pub fn is_stale_reference(&self) -> bool {
        matches!(
            self,
            Error::Manager(ManagerError::StaleReference { .. })
                | Error::Scene(SceneError::ObjectNotFound { .. })
        )
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Whether the condition is expected during normal editing and should be
    /// shown to the user as information rather than a warning.
    pub fn is_benign(&self) -> bool {
        self.is_empty_input()
            || self.is_missing_group()
            || self.is_stale_reference()
            || matches!(self, Error::Manager(ManagerError::NotManaging))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_display() {
        let err = SceneError::ObjectNotFound {
            name: "Cube".to_string(),
        };
        assert_eq!(err.to_string(), "Object not found: Cube");

        let err = SceneError::BakeFailed {
            object: "Cube".to_string(),
            modifier: "Lattice 1".to_string(),
            reason: "modifier has no target".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to apply modifier 'Lattice 1' on 'Cube': modifier has no target"
        );
    }

    #[test]
    fn test_manager_error_display() {
        let err = ManagerError::EmptyInput {
            operation: "Add Lattice to All".to_string(),
        };
        assert_eq!(err.to_string(), "Add Lattice to All: no objects to work on");

        let err = ManagerError::MissingGroup {
            name: "Lattice 4".to_string(),
        };
        assert_eq!(err.to_string(), "No lattice modifiers named 'Lattice 4'");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = SceneError::NotALattice {
            name: "Cube".to_string(),
        }
        .into();
        assert!(err.is_scene_error());
        assert!(!err.is_benign());

        let err: Error = ManagerError::StaleReference {
            kind: "object".to_string(),
            name: "Gone".to_string(),
        }
        .into();
        assert!(err.is_stale_reference());
        assert!(err.is_benign());
    }

    #[test]
    fn test_helpers() {
        assert!(Error::empty_input("Manage Selected").is_empty_input());
        assert!(Error::missing_group("Lattice 1").is_missing_group());
        assert_eq!(Error::other("boom").to_string(), "boom");
    }
}
