//! Editing session
//!
//! A [`Document`] owns the scene and the manager state that refers to it.
//! Manager state lives and dies with its document: opening a file restores
//! it, closing the document resets it.

use crate::aggregate::BindingGroups;
use crate::manager::LatticeManager;
use crate::operator::Operator;
use crate::report::OperationReport;
use latticekit_scene::MemoryScene;
use latticekit_settings::{DocumentFile, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// One open document: scene, manager and session id.
#[derive(Debug, Clone)]
pub struct Document {
    id: Uuid,
    path: Option<PathBuf>,
    pub scene: MemoryScene,
    pub manager: LatticeManager,
}

impl Document {
    /// Starts a session on `scene` with fresh manager state.
    pub fn new(scene: MemoryScene) -> Self {
        let id = Uuid::new_v4();
        debug!("New document session {}", id);
        Self {
            id,
            path: None,
            scene,
            manager: LatticeManager::new(),
        }
    }

    /// Opens a saved document. The lattice data cache is rebuilt from the
    /// loaded scene rather than trusted.
    pub fn open(path: &Path) -> SettingsResult<Self> {
        let file = DocumentFile::<MemoryScene>::load_from_file(path)?;
        let mut manager = LatticeManager::from_properties(file.properties);
        manager.refresh(&file.scene);

        let id = Uuid::new_v4();
        info!("Opened {} as session {}", path.display(), id);
        Ok(Self {
            id,
            path: Some(path.to_path_buf()),
            scene: file.scene,
            manager,
        })
    }

    /// Saves to `path` and remembers it as the document location.
    pub fn save(&mut self, path: &Path) -> SettingsResult<()> {
        let file = DocumentFile::new(self.manager.properties().clone(), self.scene.clone());
        file.save_to_file(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Runs one operator against this document's scene.
    pub fn run(&mut self, op: &Operator) -> OperationReport {
        debug!("Session {}: running '{}'", self.id, op.command());
        op.execute(&mut self.manager, &mut self.scene)
    }

    /// Current binding groups over the managed set.
    pub fn groups(&self) -> BindingGroups {
        self.manager.groups(&self.scene)
    }

    /// Ends the session. Manager state is discarded; the scene is handed
    /// back to the caller.
    pub fn close(self) -> MemoryScene {
        debug!("Closed document session {}", self.id);
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latticekit_scene::{SceneGraph, SceneObject};

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::mesh("Cube").with_selected(true));

        let mut first = Document::new(scene.clone());
        assert!(first.run(&Operator::ManageSelected).is_finished());
        assert!(first.run(&Operator::AddToAll).is_finished());
        assert_eq!(first.manager.lattice_count(), 1);

        let second = Document::new(scene);
        assert_ne!(first.id(), second.id());
        assert!(!second.manager.is_managing());
        assert_eq!(second.manager.lattice_count(), 0);
    }

    #[test]
    fn test_close_returns_scene() {
        let mut scene = MemoryScene::new();
        scene.add_object(SceneObject::mesh("Cube").with_selected(true));
        let mut doc = Document::new(scene);
        doc.run(&Operator::ManageSelected);
        doc.run(&Operator::AddToAll);

        let scene = doc.close();
        assert!(scene.object("Lattice 1").is_some());
    }
}
