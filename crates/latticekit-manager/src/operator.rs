//! Named operators, as invoked from a command line or a UI action.

use crate::manager::LatticeManager;
use crate::report::OperationReport;
use latticekit_core::{ManagerError, Result};
use latticekit_scene::SceneGraph;

/// One user-facing operation on the managed set.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    ManageSelected,
    UnmanageAll,
    AddToAll,
    AddToSelected,
    ToggleVisibility(String),
    SelectObjects(String),
    DeselectObjects(String),
    Apply(String),
    Delete(String),
    SetStrength(String, f32),
}

impl Operator {
    /// Parses an operator from its command word and arguments, e.g.
    /// `["set-strength", "Lattice 1", "0.5"]`.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut args = args.iter().map(|a| a.as_ref());
        let command = args.next().ok_or_else(|| invalid("missing operator"))?;

        let mut arg = |what: &str| {
            args.next()
                .map(str::to_string)
                .ok_or_else(|| invalid(&format!("'{}' needs {}", command, what)))
        };

        let op = match command {
            "manage" => Self::ManageSelected,
            "unmanage" => Self::UnmanageAll,
            "add-all" => Self::AddToAll,
            "add-selected" => Self::AddToSelected,
            "toggle" => Self::ToggleVisibility(arg("a lattice name")?),
            "select" => Self::SelectObjects(arg("a lattice name")?),
            "deselect" => Self::DeselectObjects(arg("a lattice name")?),
            "apply" => Self::Apply(arg("a lattice name")?),
            "delete" => Self::Delete(arg("a lattice name")?),
            "set-strength" => {
                let lattice = arg("a lattice name")?;
                let value = arg("a strength value")?;
                let value = value
                    .parse::<f32>()
                    .map_err(|e| invalid(&format!("strength '{}': {}", value, e)))?;
                Self::SetStrength(lattice, value)
            }
            other => return Err(invalid(&format!("unknown operator '{}'", other))),
        };
        Ok(op)
    }

    /// The command word this operator parses from.
    pub fn command(&self) -> &'static str {
        match self {
            Self::ManageSelected => "manage",
            Self::UnmanageAll => "unmanage",
            Self::AddToAll => "add-all",
            Self::AddToSelected => "add-selected",
            Self::ToggleVisibility(_) => "toggle",
            Self::SelectObjects(_) => "select",
            Self::DeselectObjects(_) => "deselect",
            Self::Apply(_) => "apply",
            Self::Delete(_) => "delete",
            Self::SetStrength(..) => "set-strength",
        }
    }

    /// Runs the operator against `scene`.
    pub fn execute<S: SceneGraph>(
        &self,
        manager: &mut LatticeManager,
        scene: &mut S,
    ) -> OperationReport {
        match self {
            Self::ManageSelected => manager.manage_selected(scene),
            Self::UnmanageAll => manager.unmanage_all(scene),
            Self::AddToAll => manager.add_lattice_to_all(scene),
            Self::AddToSelected => manager.add_lattice_to_selected(scene),
            Self::ToggleVisibility(name) => manager.toggle_visibility(scene, name),
            Self::SelectObjects(name) => manager.select_objects_with_modifier(scene, name),
            Self::DeselectObjects(name) => manager.deselect_objects_with_modifier(scene, name),
            Self::Apply(name) => manager.apply_lattice_modifier(scene, name),
            Self::Delete(name) => manager.delete_lattice_modifier(scene, name),
            Self::SetStrength(name, value) => manager.set_strength(scene, name, *value),
        }
    }
}

fn invalid(reason: &str) -> latticekit_core::Error {
    ManagerError::InvalidArgument {
        reason: reason.to_string(),
    }
    .into()
}
