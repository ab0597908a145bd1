//! # LatticeKit
//!
//! Batch lattice-deformer management for groups of mesh objects:
//! - Track a selected set of meshes as the managed set
//! - Create a lattice sized to their combined world-space bounds, or reuse one
//! - Bind every managed mesh to the lattice through a shared modifier name
//! - Edit one strength value for every modifier sharing that name
//!
//! ## Architecture
//!
//! LatticeKit is organized as a workspace with multiple crates:
//!
//! 1. **latticekit-core** - Error taxonomy, shared constants
//! 2. **latticekit-scene** - Scene-graph interface and in-memory scene
//! 3. **latticekit-settings** - Manager properties, document persistence
//! 4. **latticekit-manager** - Bounds, lattice factory, binding aggregation,
//!    operators and the document session
//! 5. **latticekit** - Headless binary that runs one operator on a document

pub mod cli;

pub use latticekit_core::{Error, ManagerError, Result, SceneError};

pub use latticekit_scene::{
    Collection, LatticeSettings, MemoryScene, Modifier, ModifierKind, ObjectKind, SceneGraph,
    SceneObject,
};

pub use latticekit_settings::{
    default_document_path, DocumentFile, LatticeData, ManagedObject, ManagerProperties,
    SettingsError,
};

pub use latticekit_manager::{
    calculate_bounding_box, BindingGroup, BindingGroups, BoundingBox, Document, LatticeManager,
    OperationReport, Operator, Outcome, ReportLevel,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
