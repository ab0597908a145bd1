//! # LatticeKit Core
//!
//! Error taxonomy and shared constants used by every LatticeKit crate.

pub mod constants;
pub mod error;

pub use constants::{
    clamp_strength, LATTICE_COLLECTION_NAME, LATTICE_NAME_PREFIX, SCENE_COLLECTION_NAME,
    STRENGTH_MAX, STRENGTH_MIN,
};
pub use error::{Error, ManagerError, Result, SceneError};
