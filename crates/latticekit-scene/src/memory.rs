//! In-memory scene host.

use crate::graph::SceneGraph;
use crate::naming::unique_name;
use crate::object::{Modifier, ObjectKind, SceneObject};
use latticekit_core::{Result, SceneError, SCENE_COLLECTION_NAME};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named container of objects and child containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn contains(&self, object: &str) -> bool {
        self.objects.iter().any(|o| o == object)
    }
}

/// Scene graph held entirely in memory.
///
/// Objects keep insertion order. The first collection is always the scene
/// root; objects created through [`SceneGraph::create_object`] land there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
    collections: Vec<Collection>,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            collections: vec![Collection::new(SCENE_COLLECTION_NAME)],
        }
    }
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully built object into the scene root. The object is
    /// renamed if its name is taken. Returns the name actually used.
    pub fn add_object(&mut self, mut object: SceneObject) -> String {
        object.name = unique_name(&object.name, |n| self.object(n).is_some());
        let name = object.name.clone();
        self.objects.push(object);
        if let Some(root) = self.collections.first_mut() {
            root.objects.push(name.clone());
        }
        name
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Clears the selection flag on every object.
    pub fn deselect_all(&mut self) {
        for obj in self.objects.iter_mut() {
            obj.selected = false;
        }
    }

    /// Selects exactly the named objects. Unknown names are ignored.
    pub fn select_only(&mut self, names: &[&str]) {
        for obj in self.objects.iter_mut() {
            obj.selected = names.contains(&obj.name.as_str());
        }
    }

    fn collection_mut(&mut self, name: &str) -> Result<&mut Collection> {
        self.collections
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| {
                SceneError::CollectionNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }

    fn require_object_mut(&mut self, name: &str) -> Result<&mut SceneObject> {
        self.objects
            .iter_mut()
            .find(|o| o.name == name)
            .ok_or_else(|| {
                SceneError::ObjectNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

impl SceneGraph for MemoryScene {
    fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|o| o.name.clone()).collect()
    }

    fn create_object(&mut self, name: &str, kind: ObjectKind) -> String {
        let name = self.add_object(SceneObject::new(name, kind));
        debug!("Created {} object '{}'", kind, name);
        name
    }

    fn rename_object(&mut self, name: &str, new_name: &str) -> Result<String> {
        if name == new_name {
            return Ok(name.to_string());
        }
        if self.object(name).is_none() {
            return Err(SceneError::ObjectNotFound {
                name: name.to_string(),
            }
            .into());
        }
        let actual = unique_name(new_name, |n| self.object(n).is_some());

        for obj in self.objects.iter_mut() {
            if obj.name == name {
                obj.name = actual.clone();
            }
            for modifier in obj.modifiers.iter_mut() {
                if let Some(settings) = modifier.as_lattice_mut() {
                    if settings.object.as_deref() == Some(name) {
                        settings.object = Some(actual.clone());
                    }
                }
            }
        }
        for collection in self.collections.iter_mut() {
            for linked in collection.objects.iter_mut() {
                if linked == name {
                    *linked = actual.clone();
                }
            }
        }
        Ok(actual)
    }

    fn remove_object(&mut self, name: &str) -> Result<SceneObject> {
        let index = self
            .objects
            .iter()
            .position(|o| o.name == name)
            .ok_or_else(|| SceneError::ObjectNotFound {
                name: name.to_string(),
            })?;
        let removed = self.objects.remove(index);

        for collection in self.collections.iter_mut() {
            collection.objects.retain(|o| o != name);
        }
        for obj in self.objects.iter_mut() {
            for modifier in obj.modifiers.iter_mut() {
                if let Some(settings) = modifier.as_lattice_mut() {
                    if settings.object.as_deref() == Some(name) {
                        settings.object = None;
                    }
                }
            }
        }
        Ok(removed)
    }

    fn has_collection(&self, name: &str) -> bool {
        self.collection(name).is_some()
    }

    fn ensure_collection(&mut self, name: &str) {
        if self.has_collection(name) {
            return;
        }
        self.collections.push(Collection::new(name));
        if let Some(root) = self.collections.first_mut() {
            root.children.push(name.to_string());
        }
        debug!("Created collection '{}'", name);
    }

    fn users_collection(&self, object: &str) -> Vec<String> {
        self.collections
            .iter()
            .filter(|c| c.contains(object))
            .map(|c| c.name.clone())
            .collect()
    }

    fn link_object(&mut self, collection: &str, object: &str) -> Result<()> {
        if self.object(object).is_none() {
            return Err(SceneError::ObjectNotFound {
                name: object.to_string(),
            }
            .into());
        }
        let collection = self.collection_mut(collection)?;
        if !collection.contains(object) {
            collection.objects.push(object.to_string());
        }
        Ok(())
    }

    fn unlink_object(&mut self, collection: &str, object: &str) -> Result<()> {
        let collection = self.collection_mut(collection)?;
        collection.objects.retain(|o| o != object);
        Ok(())
    }

    fn add_lattice_modifier(
        &mut self,
        object: &str,
        name: &str,
        target: &str,
        strength: f32,
    ) -> Result<String> {
        match self.object(target) {
            Some(t) if t.is_lattice() => {}
            Some(_) => {
                return Err(SceneError::NotALattice {
                    name: target.to_string(),
                }
                .into())
            }
            None => {
                return Err(SceneError::ObjectNotFound {
                    name: target.to_string(),
                }
                .into())
            }
        }

        let obj = self.require_object_mut(object)?;
        let actual = unique_name(name, |n| obj.has_modifier(n));
        obj.modifiers
            .push(Modifier::lattice(actual.clone(), target, strength));
        Ok(actual)
    }

    fn remove_modifier(&mut self, object: &str, modifier: &str) -> Result<Modifier> {
        let obj = self.require_object_mut(object)?;
        let index = obj
            .modifiers
            .iter()
            .position(|m| m.name == modifier)
            .ok_or_else(|| SceneError::ModifierNotFound {
                object: object.to_string(),
                modifier: modifier.to_string(),
            })?;
        Ok(obj.modifiers.remove(index))
    }

    fn apply_modifier(&mut self, object: &str, modifier: &str) -> Result<()> {
        let target = {
            let obj = self.object(object).ok_or_else(|| SceneError::ObjectNotFound {
                name: object.to_string(),
            })?;
            let m = obj
                .modifier(modifier)
                .ok_or_else(|| SceneError::ModifierNotFound {
                    object: object.to_string(),
                    modifier: modifier.to_string(),
                })?;
            m.as_lattice().map(|settings| settings.object.clone())
        };

        // A lattice modifier can only be evaluated while its lattice exists.
        if let Some(target) = target {
            let resolved = target.as_deref().and_then(|t| self.object(t));
            if resolved.is_none() {
                return Err(SceneError::BakeFailed {
                    object: object.to_string(),
                    modifier: modifier.to_string(),
                    reason: "modifier has no lattice object".to_string(),
                }
                .into());
            }
        }

        let obj = self.require_object_mut(object)?;
        obj.modifiers.retain(|m| m.name != modifier);
        obj.applied_modifiers.push(modifier.to_string());
        debug!("Applied modifier '{}' on '{}'", modifier, object);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_has_root_collection() {
        let scene = MemoryScene::new();
        assert!(scene.has_collection(SCENE_COLLECTION_NAME));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_create_object_links_into_root() {
        let mut scene = MemoryScene::new();
        let name = scene.create_object("Lattice", ObjectKind::Lattice);
        assert_eq!(
            scene.users_collection(&name),
            vec![SCENE_COLLECTION_NAME.to_string()]
        );
    }

    #[test]
    fn test_duplicate_object_names_are_suffixed() {
        let mut scene = MemoryScene::new();
        let a = scene.create_object("Lattice", ObjectKind::Lattice);
        let b = scene.create_object("Lattice", ObjectKind::Lattice);
        assert_eq!(a, "Lattice");
        assert_eq!(b, "Lattice.001");
    }

    #[test]
    fn test_rename_updates_links_and_targets() {
        let mut scene = MemoryScene::new();
        let lattice = scene.create_object("Lattice", ObjectKind::Lattice);
        scene.add_object(SceneObject::mesh("Cube"));
        scene
            .add_lattice_modifier("Cube", "Lattice", &lattice, 0.0)
            .unwrap();

        let renamed = scene.rename_object(&lattice, "Lattice 1").unwrap();
        assert_eq!(renamed, "Lattice 1");
        assert!(scene
            .collection(SCENE_COLLECTION_NAME)
            .unwrap()
            .contains("Lattice 1"));
        let cube = scene.object("Cube").unwrap();
        let settings = cube.modifier("Lattice").unwrap().as_lattice().unwrap();
        assert_eq!(settings.object.as_deref(), Some("Lattice 1"));
    }

    #[test]
    fn test_add_lattice_modifier_requires_lattice_target() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::mesh("Cube"));
        scene.add_object(SceneObject::mesh("Sphere"));
        let err = scene
            .add_lattice_modifier("Cube", "Lattice 1", "Sphere", 0.0)
            .unwrap_err();
        assert!(err.is_scene_error());
    }

    #[test]
    fn test_apply_without_target_fails() {
        let mut scene = MemoryScene::new();
        let lattice = scene.create_object("Lattice 1", ObjectKind::Lattice);
        scene.add_object(SceneObject::mesh("Cube"));
        scene
            .add_lattice_modifier("Cube", "Lattice 1", &lattice, 0.5)
            .unwrap();
        scene.remove_object(&lattice).unwrap();

        assert!(scene.apply_modifier("Cube", "Lattice 1").is_err());
        assert!(scene.object("Cube").unwrap().has_modifier("Lattice 1"));
    }
}
