//! # LatticeKit Scene
//!
//! The scene-graph surface the lattice manager talks to.
//!
//! - [`SceneGraph`]: the narrow host interface (object lookup, selection,
//!   modifiers, container membership, lattice creation)
//! - [`MemoryScene`]: an in-memory, serialisable host used by the binary and
//!   the test suites
//! - [`SceneObject`] / [`Modifier`]: the per-object data the interface exposes

pub mod graph;
pub mod memory;
pub mod naming;
pub mod object;

pub use graph::SceneGraph;
pub use memory::{Collection, MemoryScene};
pub use naming::unique_name;
pub use object::{
    box_corners, unit_cube_corners, LatticeSettings, Modifier, ModifierKind, ObjectKind,
    SceneObject,
};
