//! The scene-graph interface consumed by the lattice manager.

use crate::object::{Modifier, ObjectKind, SceneObject};
use latticekit_core::{Result, SceneError};

/// Narrow interface to the host scene graph.
///
/// The manager never stores objects; it resolves them by name through this
/// trait every time it needs them, so a host may rename or delete objects
/// between calls and the manager only ever sees a stale name.
pub trait SceneGraph {
    /// Looks up an object by name.
    fn object(&self, name: &str) -> Option<&SceneObject>;

    /// Looks up an object by name for mutation.
    fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject>;

    /// Names of every object in the scene, in enumeration order.
    fn object_names(&self) -> Vec<String>;

    /// Creates an object of `kind` named `name` (or a unique variant of it),
    /// linked into the scene root container. Returns the name actually used.
    fn create_object(&mut self, name: &str, kind: ObjectKind) -> String;

    /// Renames an object. Returns the name actually used, which may carry a
    /// numeric suffix if `new_name` is taken.
    fn rename_object(&mut self, name: &str, new_name: &str) -> Result<String>;

    /// Removes an object from the scene, unlinking it from every container
    /// and clearing lattice modifier targets that pointed at it.
    fn remove_object(&mut self, name: &str) -> Result<SceneObject>;

    /// Whether a container with this name exists.
    fn has_collection(&self, name: &str) -> bool;

    /// Creates a container linked under the scene root. No-op if it exists.
    fn ensure_collection(&mut self, name: &str);

    /// Containers that `object` is linked into.
    fn users_collection(&self, object: &str) -> Vec<String>;

    /// Links `object` into `collection`.
    fn link_object(&mut self, collection: &str, object: &str) -> Result<()>;

    /// Unlinks `object` from `collection`.
    fn unlink_object(&mut self, collection: &str, object: &str) -> Result<()>;

    /// Adds a lattice modifier to `object` targeting `target`. Returns the
    /// modifier name actually used.
    fn add_lattice_modifier(
        &mut self,
        object: &str,
        name: &str,
        target: &str,
        strength: f32,
    ) -> Result<String>;

    /// Removes a modifier from an object's stack without baking it.
    fn remove_modifier(&mut self, object: &str, modifier: &str) -> Result<Modifier>;

    /// Bakes a modifier into the object's geometry and removes it.
    fn apply_modifier(&mut self, object: &str, modifier: &str) -> Result<()>;

    /// Names of selected objects, in enumeration order.
    fn selected_object_names(&self) -> Vec<String> {
        self.object_names()
            .into_iter()
            .filter(|name| self.object(name).is_some_and(|o| o.selected))
            .collect()
    }

    /// Sets the selection flag of an object.
    fn select_object(&mut self, name: &str, selected: bool) -> Result<()> {
        let obj = self
            .object_mut(name)
            .ok_or_else(|| SceneError::ObjectNotFound {
                name: name.to_string(),
            })?;
        obj.selected = selected;
        Ok(())
    }
}
