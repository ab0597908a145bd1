//! Scene host integration tests

use glam::Vec3;
use latticekit_core::{LATTICE_COLLECTION_NAME, SCENE_COLLECTION_NAME};
use latticekit_scene::{MemoryScene, ObjectKind, SceneGraph, SceneObject};

fn scene_with_bound_cubes() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene.add_object(SceneObject::mesh("Cube").with_selected(true));
    scene.add_object(SceneObject::mesh("Cube.001").with_location(Vec3::new(4.0, 0.0, 0.0)));
    scene.add_object(SceneObject::new("Camera", ObjectKind::Other).with_selected(true));
    let lattice = scene.create_object("Lattice 1", ObjectKind::Lattice);
    for cube in ["Cube", "Cube.001"] {
        scene
            .add_lattice_modifier(cube, "Lattice 1", &lattice, 0.0)
            .unwrap();
    }
    scene
}

#[test]
fn test_selected_object_names_keep_scene_order() {
    let scene = scene_with_bound_cubes();
    assert_eq!(
        scene.selected_object_names(),
        vec!["Cube".to_string(), "Camera".to_string()]
    );
}

#[test]
fn test_remove_lattice_clears_modifier_targets() {
    let mut scene = scene_with_bound_cubes();
    scene.remove_object("Lattice 1").unwrap();

    for cube in ["Cube", "Cube.001"] {
        let obj = scene.object(cube).unwrap();
        let settings = obj.modifier("Lattice 1").unwrap().as_lattice().unwrap();
        assert_eq!(settings.object, None);
    }
    assert!(scene.users_collection("Lattice 1").is_empty());
}

#[test]
fn test_duplicate_modifier_name_on_same_object() {
    let mut scene = scene_with_bound_cubes();
    let name = scene
        .add_lattice_modifier("Cube", "Lattice 1", "Lattice 1", 0.0)
        .unwrap();
    assert_eq!(name, "Lattice 1.001");
    assert_eq!(scene.object("Cube").unwrap().modifiers.len(), 2);
}

#[test]
fn test_collection_links() {
    let mut scene = scene_with_bound_cubes();
    scene.ensure_collection(LATTICE_COLLECTION_NAME);
    scene.ensure_collection(LATTICE_COLLECTION_NAME);
    assert_eq!(scene.collections().count(), 2);
    assert_eq!(
        scene.collection(SCENE_COLLECTION_NAME).unwrap().children,
        vec![LATTICE_COLLECTION_NAME.to_string()]
    );

    scene
        .unlink_object(SCENE_COLLECTION_NAME, "Lattice 1")
        .unwrap();
    scene
        .link_object(LATTICE_COLLECTION_NAME, "Lattice 1")
        .unwrap();
    assert_eq!(
        scene.users_collection("Lattice 1"),
        vec![LATTICE_COLLECTION_NAME.to_string()]
    );

    assert!(scene.link_object("Missing", "Lattice 1").is_err());
    assert!(scene.link_object(LATTICE_COLLECTION_NAME, "Missing").is_err());
}

#[test]
fn test_apply_and_remove_modifier() {
    let mut scene = scene_with_bound_cubes();
    scene.apply_modifier("Cube", "Lattice 1").unwrap();
    let cube = scene.object("Cube").unwrap();
    assert!(!cube.has_modifier("Lattice 1"));
    assert_eq!(cube.applied_modifiers, vec!["Lattice 1".to_string()]);

    let removed = scene.remove_modifier("Cube.001", "Lattice 1").unwrap();
    assert_eq!(removed.name, "Lattice 1");
    assert!(scene.object("Cube.001").unwrap().applied_modifiers.is_empty());

    assert!(scene.remove_modifier("Cube.001", "Lattice 1").is_err());
}

#[test]
fn test_scene_survives_json() {
    let scene = scene_with_bound_cubes();
    let json = serde_json::to_string(&scene).unwrap();
    let restored: MemoryScene = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, scene);
}
