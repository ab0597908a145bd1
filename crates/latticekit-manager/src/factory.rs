//! Creating and filing lattice objects.

use crate::bounds::BoundingBox;
use glam::Vec3;
use latticekit_core::{Result, SceneError, LATTICE_COLLECTION_NAME, LATTICE_NAME_PREFIX};
use latticekit_scene::{ObjectKind, SceneGraph};
use tracing::debug;

/// Where a new lattice goes and how large it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePlacement {
    pub location: Vec3,
    pub scale: Vec3,
}

impl LatticePlacement {
    /// Centred on `bounds`, scaled to its full span. The lattice's own
    /// bounds are the unit cube, so this encloses `bounds` exactly.
    pub fn enclosing(bounds: &BoundingBox) -> Self {
        Self {
            location: bounds.center(),
            scale: bounds.size(),
        }
    }
}

/// Creates a lattice around `bounds`, names it `name` and files it under the
/// lattice container. Returns the name the scene actually gave it.
pub fn create_and_position_lattice<S: SceneGraph>(
    scene: &mut S,
    bounds: &BoundingBox,
    name: &str,
) -> Result<String> {
    let placement = LatticePlacement::enclosing(bounds);
    let created = scene.create_object(LATTICE_NAME_PREFIX, ObjectKind::Lattice);

    let lattice = scene
        .object_mut(&created)
        .ok_or_else(|| SceneError::ObjectNotFound {
            name: created.clone(),
        })?;
    lattice.location = placement.location;
    lattice.scale = placement.scale;

    let name = scene.rename_object(&created, name)?;
    move_to_lattice_collection(scene, &name)?;

    debug!(
        "Created lattice '{}' at {:?} with scale {:?}",
        name, placement.location, placement.scale
    );
    Ok(name)
}

/// Links `object` into the lattice container (creating it under the scene
/// root if needed) and unlinks it from every other container.
pub fn move_to_lattice_collection<S: SceneGraph>(scene: &mut S, object: &str) -> Result<()> {
    scene.ensure_collection(LATTICE_COLLECTION_NAME);
    for collection in scene.users_collection(object) {
        scene.unlink_object(&collection, object)?;
    }
    scene.link_object(LATTICE_COLLECTION_NAME, object)
}

/// Uses an existing lattice as the binding target. Nothing is created or
/// moved; the lattice's current name becomes the binding name.
pub fn reuse_lattice<S: SceneGraph>(scene: &S, name: &str) -> Result<String> {
    let obj = scene.object(name).ok_or_else(|| SceneError::ObjectNotFound {
        name: name.to_string(),
    })?;
    if !obj.is_lattice() {
        return Err(SceneError::NotALattice {
            name: name.to_string(),
        }
        .into());
    }
    Ok(obj.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use latticekit_core::SCENE_COLLECTION_NAME;
    use latticekit_scene::{MemoryScene, SceneObject};

    fn bounds() -> BoundingBox {
        BoundingBox::new(Vec3::new(-0.5, -0.5, -0.5), Vec3::new(4.5, 0.5, 0.5))
    }

    #[test]
    fn test_placement_encloses_bounds() {
        let placement = LatticePlacement::enclosing(&bounds());
        assert_eq!(placement.location, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(placement.scale, Vec3::new(5.0, 1.0, 1.0));
    }

    #[test]
    fn test_created_lattice_is_named_and_filed() {
        let mut scene = MemoryScene::new();
        let name = create_and_position_lattice(&mut scene, &bounds(), "Lattice 1").unwrap();

        assert_eq!(name, "Lattice 1");
        let lattice = scene.object(&name).unwrap();
        assert!(lattice.is_lattice());
        assert_eq!(lattice.location, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(lattice.scale, Vec3::new(5.0, 1.0, 1.0));
        assert_eq!(
            scene.users_collection(&name),
            vec![LATTICE_COLLECTION_NAME.to_string()]
        );
        assert!(!scene
            .collection(SCENE_COLLECTION_NAME)
            .unwrap()
            .contains(&name));
    }

    #[test]
    fn test_name_collision_gets_suffix() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::new("Lattice 1", ObjectKind::Lattice));
        let name = create_and_position_lattice(&mut scene, &bounds(), "Lattice 1").unwrap();
        assert_eq!(name, "Lattice 1.001");
    }

    #[test]
    fn test_reuse_requires_lattice() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::mesh("Cube"));
        scene.add_object(SceneObject::new("Cage", ObjectKind::Lattice));

        assert_eq!(reuse_lattice(&scene, "Cage").unwrap(), "Cage");
        assert!(reuse_lattice(&scene, "Cube").is_err());
        assert!(reuse_lattice(&scene, "Missing").is_err());
    }
}
