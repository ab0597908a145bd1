//! Per-lattice strength cache kept alongside the manager properties.

use crate::aggregate::{gather_lattice_modifiers, BindingGroups};
use latticekit_scene::SceneGraph;
use latticekit_settings::{LatticeData, ManagerProperties};

/// Rebuilds `props.lattice_data` from the current binding groups: one entry
/// per group, holding the strength of its first modifier. Returns the groups
/// the cache was built from.
pub fn update_lattice_data<S: SceneGraph>(scene: &S, props: &mut ManagerProperties) -> BindingGroups {
    let groups = gather_lattice_modifiers(scene, &props.managed_objects);
    props.lattice_data = groups
        .iter()
        .map(|group| LatticeData::new(group.name.clone(), group.strength()))
        .collect();
    groups
}
