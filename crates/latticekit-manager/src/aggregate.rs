//! Read-only grouping of lattice modifiers across the managed set.
//!
//! Modifiers are grouped by name. A group exists only while at least one
//! managed object carries a lattice modifier with that name and a live
//! target; nothing here is stored, every call re-reads the scene.

use latticekit_scene::{SceneGraph, SceneObject};
use latticekit_settings::ManagedObject;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// One lattice modifier on one object.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingInstance {
    pub object_name: String,
    pub modifier_name: String,
    pub strength: f32,
}

/// All lattice modifiers sharing one name.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingGroup {
    /// Modifier name shared by every binding in the group
    pub name: String,
    /// Lattice targeted by the first binding found
    pub lattice_object: String,
    /// Bindings in managed-list order
    pub bindings: SmallVec<[BindingInstance; 4]>,
    /// Whether the lattice is shown in the viewport
    pub visible: bool,
}

impl BindingGroup {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Strength of the first binding; the group's displayed value.
    pub fn strength(&self) -> f32 {
        self.bindings.first().map(|b| b.strength).unwrap_or(0.0)
    }

    /// Whether every binding in the group carries the same strength.
    pub fn is_uniform(&self) -> bool {
        let first = self.strength();
        self.bindings.iter().all(|b| b.strength == first)
    }

    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.object_name.as_str())
    }
}

/// Binding groups in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingGroups {
    groups: Vec<BindingGroup>,
    index: HashMap<String, usize>,
}

impl BindingGroups {
    pub fn get(&self, name: &str) -> Option<&BindingGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BindingGroup> {
        self.groups.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    fn push_binding(&mut self, binding: BindingInstance, lattice: &SceneObject) {
        match self.index.get(&binding.modifier_name) {
            Some(&i) => self.groups[i].bindings.push(binding),
            None => {
                self.index
                    .insert(binding.modifier_name.clone(), self.groups.len());
                self.groups.push(BindingGroup {
                    name: binding.modifier_name.clone(),
                    lattice_object: lattice.name.clone(),
                    visible: !lattice.hide_viewport,
                    bindings: smallvec::smallvec![binding],
                });
            }
        }
    }
}

impl<'a> IntoIterator for &'a BindingGroups {
    type Item = &'a BindingGroup;
    type IntoIter = std::slice::Iter<'a, BindingGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Resolves managed names to scene objects, dropping names that no longer
/// exist.
pub fn resolve_managed_objects<'a, S: SceneGraph>(
    scene: &'a S,
    managed: &[ManagedObject],
) -> Vec<&'a SceneObject> {
    managed
        .iter()
        .filter_map(|m| {
            let obj = scene.object(&m.object_name);
            if obj.is_none() {
                debug!("Skipping stale managed object '{}'", m.object_name);
            }
            obj
        })
        .collect()
}

/// Groups every lattice modifier on the managed objects by modifier name.
///
/// Modifiers without a target, or whose target no longer resolves to an
/// object, are skipped. The scene is not modified.
pub fn gather_lattice_modifiers<S: SceneGraph>(
    scene: &S,
    managed: &[ManagedObject],
) -> BindingGroups {
    let mut groups = BindingGroups::default();

    for obj in resolve_managed_objects(scene, managed) {
        for (modifier, settings) in obj.lattice_modifiers() {
            let Some(target) = settings.object.as_deref() else {
                continue;
            };
            let Some(lattice) = scene.object(target) else {
                debug!(
                    "Modifier '{}' on '{}' targets missing lattice '{}'",
                    modifier.name, obj.name, target
                );
                continue;
            };
            groups.push_binding(
                BindingInstance {
                    object_name: obj.name.clone(),
                    modifier_name: modifier.name.clone(),
                    strength: settings.strength,
                },
                lattice,
            );
        }
    }

    groups
}
