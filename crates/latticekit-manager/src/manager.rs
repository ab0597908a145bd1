//! The managed object set and the operators that act on it.
//!
//! Every operator returns an [`OperationReport`]; failures are converted at
//! the operator boundary and never escape. Operators that change bindings
//! rebuild the lattice data cache before returning.

use crate::aggregate::{gather_lattice_modifiers, resolve_managed_objects, BindingGroups};
use crate::bounds::calculate_bounding_box;
use crate::cache::update_lattice_data;
use crate::factory::{create_and_position_lattice, reuse_lattice};
use crate::report::{OperationReport, ReportLevel};
use crate::strength::update_strength;
use latticekit_core::{clamp_strength, Error, ManagerError, Result, STRENGTH_MIN};
use latticekit_scene::SceneGraph;
use latticekit_settings::ManagerProperties;
use tracing::{debug, warn};

const MANAGE_SELECTED: &str = "Manage Selected Objects";
const UNMANAGE_ALL: &str = "Unmanage All";
const ADD_TO_ALL: &str = "Add Lattice to All";
const ADD_TO_SELECTED: &str = "Add Lattice to Selected";
const TOGGLE_VISIBILITY: &str = "Toggle Lattice Visibility";
const SELECT_WITH_MODIFIER: &str = "Select Objects with Modifier";
const DESELECT_WITH_MODIFIER: &str = "Deselect Objects with Modifier";
const APPLY_MODIFIER: &str = "Apply Lattice Modifier";
const DELETE_MODIFIER: &str = "Delete Lattice Modifier";
const SET_STRENGTH: &str = "Set Lattice Strength";

/// Lattice manager for one document.
///
/// Owns the [`ManagerProperties`]; the scene is passed into each operator so
/// the caller keeps ownership of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatticeManager {
    properties: ManagerProperties,
}

impl LatticeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a manager from saved properties.
    pub fn from_properties(properties: ManagerProperties) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &ManagerProperties {
        &self.properties
    }

    pub fn is_managing(&self) -> bool {
        self.properties.is_managing
    }

    pub fn managed_names(&self) -> Vec<String> {
        self.properties.managed_names()
    }

    pub fn lattice_count(&self) -> u32 {
        self.properties.lattice_count()
    }

    /// Current binding groups across the managed set. Read-only.
    pub fn groups<S: SceneGraph>(&self, scene: &S) -> BindingGroups {
        gather_lattice_modifiers(scene, &self.properties.managed_objects)
    }

    /// Rebuilds the lattice data cache from the scene and returns the groups
    /// it was built from.
    pub fn refresh<S: SceneGraph>(&mut self, scene: &S) -> BindingGroups {
        update_lattice_data(scene, &mut self.properties)
    }

    /// Cached strength for a lattice, as last rebuilt.
    pub fn cached_strength(&self, lattice_name: &str) -> Option<f32> {
        self.properties
            .lattice_data(lattice_name)
            .map(|data| data.strength())
    }

    pub fn set_use_existing_lattice(&mut self, use_existing: bool) {
        self.properties.use_existing_lattice = use_existing;
    }

    /// Sets the lattice new bindings reuse. Only lattice objects are
    /// accepted; `None` clears the reference.
    pub fn set_existing_lattice<S: SceneGraph>(
        &mut self,
        scene: &S,
        lattice: Option<&str>,
    ) -> Result<()> {
        self.properties.lattice_object = match lattice {
            Some(name) => Some(reuse_lattice(scene, name)?),
            None => None,
        };
        Ok(())
    }

    /// Replaces the managed set with the selected mesh objects.
    pub fn manage_selected<S: SceneGraph>(&mut self, scene: &S) -> OperationReport {
        OperationReport::from_result(MANAGE_SELECTED, self.try_manage_selected(scene))
    }

    fn try_manage_selected<S: SceneGraph>(&mut self, scene: &S) -> Result<OperationReport> {
        let meshes = selected_meshes(scene);
        if meshes.is_empty() {
            return Err(Error::empty_input(MANAGE_SELECTED));
        }

        self.properties.is_managing = true;
        self.properties.clear_managed();
        for name in meshes {
            self.properties.add_managed(name);
        }
        update_lattice_data(scene, &mut self.properties);

        Ok(OperationReport::finished(
            MANAGE_SELECTED,
            format!(
                "Managed {} selected objects.",
                self.properties.managed_objects.len()
            ),
        ))
    }

    /// Clears the managed set. Safe to call when not managing.
    pub fn unmanage_all<S: SceneGraph>(&mut self, scene: &S) -> OperationReport {
        self.properties.is_managing = false;
        self.properties.clear_managed();
        update_lattice_data(scene, &mut self.properties);
        OperationReport::from_result(
            UNMANAGE_ALL,
            Ok(OperationReport::finished(
                UNMANAGE_ALL,
                "Unmanaged all objects.",
            )),
        )
    }

    /// Binds a lattice around the whole managed set to every managed object.
    pub fn add_lattice_to_all<S: SceneGraph>(&mut self, scene: &mut S) -> OperationReport {
        let result = self.require_managing().and_then(|_| {
            let objects: Vec<String> =
                resolve_managed_objects(scene, &self.properties.managed_objects)
                    .into_iter()
                    .filter(|obj| obj.is_mesh())
                    .map(|obj| obj.name.clone())
                    .collect();
            self.add_lattice(scene, &objects, ADD_TO_ALL, "managed")
        });
        OperationReport::from_result(ADD_TO_ALL, result)
    }

    /// Binds a lattice around the selected meshes to those meshes only.
    /// The selection does not have to be part of the managed set.
    pub fn add_lattice_to_selected<S: SceneGraph>(&mut self, scene: &mut S) -> OperationReport {
        let result = self.require_managing().and_then(|_| {
            let objects = selected_meshes(scene);
            self.add_lattice(scene, &objects, ADD_TO_SELECTED, "selected")
        });
        OperationReport::from_result(ADD_TO_SELECTED, result)
    }

    fn add_lattice<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        objects: &[String],
        operation: &'static str,
        scope: &str,
    ) -> Result<OperationReport> {
        if objects.is_empty() {
            return Err(Error::empty_input(operation));
        }

        let lattice_name = match self.existing_lattice(scene) {
            Some(name) => name,
            None => {
                let bounds = {
                    let resolved = objects.iter().filter_map(|name| scene.object(name));
                    calculate_bounding_box(resolved)?
                };
                let name = self.properties.next_lattice_name();
                create_and_position_lattice(scene, &bounds, &name)?
            }
        };

        for object in objects {
            let modifier =
                scene.add_lattice_modifier(object, &lattice_name, &lattice_name, STRENGTH_MIN)?;
            if modifier != lattice_name {
                warn!(
                    "'{}' already carries '{}'; new modifier named '{}'",
                    object, lattice_name, modifier
                );
            }
            debug!("Bound '{}' to lattice '{}'", object, lattice_name);
        }
        update_lattice_data(scene, &mut self.properties);

        Ok(OperationReport::finished(
            operation,
            format!(
                "Added lattice '{}' to {} {} objects.",
                lattice_name,
                objects.len(),
                scope
            ),
        ))
    }

    /// The lattice to reuse, if reuse is enabled and the reference is live.
    fn existing_lattice<S: SceneGraph>(&self, scene: &S) -> Option<String> {
        if !self.properties.use_existing_lattice {
            return None;
        }
        let name = self.properties.lattice_object.as_deref()?;
        match reuse_lattice(scene, name) {
            Ok(name) => Some(name),
            Err(err) => {
                warn!("Existing lattice unusable, creating a new one: {}", err);
                None
            }
        }
    }

    /// Flips the viewport visibility of a lattice.
    pub fn toggle_visibility<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        lattice_name: &str,
    ) -> OperationReport {
        OperationReport::from_result(
            TOGGLE_VISIBILITY,
            self.try_toggle_visibility(scene, lattice_name),
        )
    }

    fn try_toggle_visibility<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        lattice_name: &str,
    ) -> Result<OperationReport> {
        let lattice = scene
            .object_mut(lattice_name)
            .filter(|obj| obj.is_lattice())
            .ok_or_else(|| ManagerError::StaleReference {
                kind: "lattice".to_string(),
                name: lattice_name.to_string(),
            })?;
        lattice.hide_viewport = !lattice.hide_viewport;
        let state = if lattice.hide_viewport { "hidden" } else { "shown" };

        Ok(OperationReport::finished(
            TOGGLE_VISIBILITY,
            format!("Lattice '{}' {}.", lattice_name, state),
        ))
    }

    /// Selects every mesh in the scene carrying a modifier named
    /// `modifier_name`.
    pub fn select_objects_with_modifier<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        modifier_name: &str,
    ) -> OperationReport {
        let result = set_selection_for_carriers(scene, modifier_name, true).map(|count| {
            OperationReport::finished(
                SELECT_WITH_MODIFIER,
                format!(
                    "Selected {} objects with modifier '{}'.",
                    count, modifier_name
                ),
            )
        });
        OperationReport::from_result(SELECT_WITH_MODIFIER, result)
    }

    /// Deselects every mesh in the scene carrying a modifier named
    /// `modifier_name`.
    pub fn deselect_objects_with_modifier<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        modifier_name: &str,
    ) -> OperationReport {
        let result = set_selection_for_carriers(scene, modifier_name, false).map(|count| {
            OperationReport::finished(
                DESELECT_WITH_MODIFIER,
                format!(
                    "Deselected {} objects with modifier '{}'.",
                    count, modifier_name
                ),
            )
        });
        OperationReport::from_result(DESELECT_WITH_MODIFIER, result)
    }

    /// Bakes the named modifier into every mesh in the scene that carries
    /// it, then rebuilds the cache.
    ///
    /// A failure on one object does not stop the others; the report turns
    /// into a warning naming how many failed.
    pub fn apply_lattice_modifier<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        modifier_name: &str,
    ) -> OperationReport {
        OperationReport::from_result(
            APPLY_MODIFIER,
            self.try_apply_lattice_modifier(scene, modifier_name),
        )
    }

    fn try_apply_lattice_modifier<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        modifier_name: &str,
    ) -> Result<OperationReport> {
        let carriers = carriers_of(scene, modifier_name)?;

        let mut failed = 0usize;
        for object in &carriers {
            if let Err(err) = scene.apply_modifier(object, modifier_name) {
                warn!("{}", err);
                failed += 1;
            }
        }
        update_lattice_data(scene, &mut self.properties);

        let applied = carriers.len() - failed;
        if applied == 0 {
            return Ok(OperationReport::cancelled(
                APPLY_MODIFIER,
                ReportLevel::Warning,
                format!(
                    "Could not apply lattice modifier '{}' to any of {} objects.",
                    modifier_name, failed
                ),
            ));
        }
        if failed > 0 {
            return Ok(OperationReport::finished_with_warning(
                APPLY_MODIFIER,
                format!(
                    "Applied lattice modifier '{}' to {} objects; {} failed.",
                    modifier_name, applied, failed
                ),
            ));
        }
        Ok(OperationReport::finished(
            APPLY_MODIFIER,
            format!(
                "Applied lattice modifier '{}' to {} objects.",
                modifier_name, applied
            ),
        ))
    }

    /// Removes the named modifier from every mesh in the scene that carries
    /// it, without baking, then rebuilds the cache.
    pub fn delete_lattice_modifier<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        modifier_name: &str,
    ) -> OperationReport {
        OperationReport::from_result(
            DELETE_MODIFIER,
            self.try_delete_lattice_modifier(scene, modifier_name),
        )
    }

    fn try_delete_lattice_modifier<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        modifier_name: &str,
    ) -> Result<OperationReport> {
        let carriers = carriers_of(scene, modifier_name)?;

        let mut removed = 0usize;
        for object in &carriers {
            match scene.remove_modifier(object, modifier_name) {
                Ok(_) => removed += 1,
                Err(err) => debug!("Skipping '{}': {}", object, err),
            }
        }
        update_lattice_data(scene, &mut self.properties);

        Ok(OperationReport::finished(
            DELETE_MODIFIER,
            format!(
                "Deleted lattice modifier '{}' from {} objects.",
                modifier_name, removed
            ),
        ))
    }

    /// Sets the strength of a lattice group: the value is clamped into the
    /// field range, written to every modifier of the group, and stored in
    /// the cache entry.
    pub fn set_strength<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        lattice_name: &str,
        value: f32,
    ) -> OperationReport {
        OperationReport::from_result(
            SET_STRENGTH,
            self.try_set_strength(scene, lattice_name, value),
        )
    }

    fn try_set_strength<S: SceneGraph>(
        &mut self,
        scene: &mut S,
        lattice_name: &str,
        value: f32,
    ) -> Result<OperationReport> {
        let value = clamp_strength(value);
        let written =
            match update_strength(scene, &self.properties.managed_objects, lattice_name, value) {
                Ok(written) => written,
                Err(err) => {
                    // The cache may still hold an entry for a lattice deleted by the host.
                    if err.is_missing_group() {
                        update_lattice_data(scene, &mut self.properties);
                    }
                    return Err(err);
                }
            };

        match self.properties.lattice_data_mut(lattice_name) {
            Some(data) => {
                data.set_strength(value);
            }
            None => {
                update_lattice_data(scene, &mut self.properties);
            }
        }

        Ok(OperationReport::finished(
            SET_STRENGTH,
            format!(
                "Set strength of '{}' to {} on {} modifiers.",
                lattice_name, value, written
            ),
        ))
    }

    fn require_managing(&self) -> Result<()> {
        if self.properties.is_managing {
            Ok(())
        } else {
            Err(ManagerError::NotManaging.into())
        }
    }
}

/// Names of selected mesh objects, in scene order.
fn selected_meshes<S: SceneGraph>(scene: &S) -> Vec<String> {
    scene
        .selected_object_names()
        .into_iter()
        .filter(|name| scene.object(name).is_some_and(|obj| obj.is_mesh()))
        .collect()
}

/// Mesh objects in the scene carrying a modifier named `modifier_name`.
fn carriers_of<S: SceneGraph>(scene: &S, modifier_name: &str) -> Result<Vec<String>> {
    let carriers: Vec<String> = scene
        .object_names()
        .into_iter()
        .filter(|name| {
            scene
                .object(name)
                .is_some_and(|obj| obj.is_mesh() && obj.has_modifier(modifier_name))
        })
        .collect();
    if carriers.is_empty() {
        return Err(Error::missing_group(modifier_name));
    }
    Ok(carriers)
}

fn set_selection_for_carriers<S: SceneGraph>(
    scene: &mut S,
    modifier_name: &str,
    selected: bool,
) -> Result<usize> {
    let carriers = carriers_of(scene, modifier_name)?;
    for object in &carriers {
        scene.select_object(object, selected)?;
    }
    Ok(carriers.len())
}
