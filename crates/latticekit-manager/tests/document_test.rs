use glam::Vec3;
use latticekit_manager::{Document, Operator};
use latticekit_scene::{MemoryScene, SceneGraph, SceneObject};
use latticekit_settings::{DocumentFile, SettingsError};
use tempfile::TempDir;

fn scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene.add_object(SceneObject::mesh("Cube").with_selected(true));
    scene.add_object(
        SceneObject::mesh("Cube.001")
            .with_location(Vec3::new(4.0, 0.0, 0.0))
            .with_selected(true),
    );
    scene
}

fn run_all(doc: &mut Document, ops: &[&[&str]]) {
    for args in ops {
        let op = Operator::parse(*args).unwrap();
        let report = doc.run(&op);
        assert!(report.is_finished(), "{report}");
    }
}

#[test]
fn test_save_and_reopen_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("doc.json");

    let mut doc = Document::new(scene());
    run_all(
        &mut doc,
        &[
            &["manage"],
            &["add-all"],
            &["set-strength", "Lattice 1", "0.4"],
        ],
    );
    doc.save(&path).unwrap();
    assert_eq!(doc.path(), Some(path.as_path()));

    let reopened = Document::open(&path).unwrap();
    assert_ne!(reopened.id(), doc.id());
    assert_eq!(reopened.scene, doc.scene);
    assert_eq!(reopened.manager.properties(), doc.manager.properties());
    assert_eq!(reopened.manager.lattice_count(), 1);

    let groups = reopened.groups();
    assert_eq!(groups.get("Lattice 1").unwrap().strength(), 0.4);
}

#[test]
fn test_save_and_reopen_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("doc.toml");

    let mut doc = Document::new(scene());
    run_all(&mut doc, &[&["manage"], &["add-all"], &["toggle", "Lattice 1"]]);
    doc.save(&path).unwrap();

    let reopened = Document::open(&path).unwrap();
    assert!(reopened.scene.object("Lattice 1").unwrap().hide_viewport);
    assert!(!reopened.groups().get("Lattice 1").unwrap().visible);
}

#[test]
fn test_counter_persists_with_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("doc.json");

    let mut doc = Document::new(scene());
    run_all(&mut doc, &[&["manage"], &["add-all"], &["add-all"]]);
    doc.save(&path).unwrap();

    let mut reopened = Document::open(&path).unwrap();
    run_all(&mut reopened, &[&["add-all"]]);
    assert!(reopened.scene.object("Lattice 3").is_some());
}

#[test]
fn test_stale_cache_is_rebuilt_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("doc.json");

    let mut doc = Document::new(scene());
    run_all(&mut doc, &[&["manage"], &["add-all"]]);
    let mut properties = doc.manager.properties().clone();
    properties.lattice_data.clear();
    DocumentFile::new(properties, doc.scene.clone())
        .save_to_file(&path)
        .unwrap();

    let reopened = Document::open(&path).unwrap();
    assert_eq!(reopened.manager.cached_strength("Lattice 1"), Some(0.0));
}

#[test]
fn test_open_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = Document::open(&temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(SettingsError::LoadError(_))));
}
