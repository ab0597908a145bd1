//! # LatticeKit Manager
//!
//! Keeps a group of mesh objects bound to shared lattice deformers.
//!
//! ## Core Components
//!
//! - **Bounds**: world-space bounding box over a set of transformed objects
//! - **Factory**: creates, sizes and files a lattice around a bounding box
//! - **Aggregate**: read-only grouping of lattice modifiers by name across
//!   the managed set
//! - **Manager**: the managed set itself and every user-facing operator
//! - **Strength**: writes one strength into every modifier of a group
//! - **Cache**: per-lattice strength entries rebuilt after each change
//! - **Document**: one editing session (scene + manager state)
//!
//! ## Flow
//!
//! ```text
//! LatticeManager (operators)
//!   ├── bounds + factory    (add lattice)
//!   ├── aggregate           (read-only, every time)
//!   │     └── cache         (rebuilt after structural changes)
//!   └── strength            (one value -> every modifier in a group)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use latticekit_manager::Document;
//!
//! let mut doc = Document::new(scene);
//! doc.manager.manage_selected(&doc.scene);
//! doc.manager.add_lattice_to_all(&mut doc.scene);
//! doc.manager.set_strength(&mut doc.scene, "Lattice 1", 0.5);
//! ```

pub mod aggregate;
pub mod bounds;
pub mod cache;
pub mod document;
pub mod factory;
pub mod manager;
pub mod operator;
pub mod report;
pub mod strength;

pub use aggregate::{
    gather_lattice_modifiers, resolve_managed_objects, BindingGroup, BindingGroups,
    BindingInstance,
};
pub use bounds::{calculate_bounding_box, Bounded, BoundingBox};
pub use cache::update_lattice_data;
pub use document::Document;
pub use factory::{
    create_and_position_lattice, move_to_lattice_collection, reuse_lattice, LatticePlacement,
};
pub use manager::LatticeManager;
pub use operator::Operator;
pub use report::{OperationReport, Outcome, ReportLevel};
pub use strength::update_strength;
