//! One strength value for every modifier in a binding group.

use crate::aggregate::gather_lattice_modifiers;
use latticekit_core::{Error, Result};
use latticekit_scene::SceneGraph;
use latticekit_settings::ManagedObject;
use tracing::debug;

/// Writes `value` into every lattice modifier named `lattice_name` on the
/// managed objects. Returns how many modifiers were written.
///
/// The value is written as given; range checking belongs to the field that
/// produced it. Fails with a missing-group error when no managed object
/// carries the modifier, in which case nothing is touched.
pub fn update_strength<S: SceneGraph>(
    scene: &mut S,
    managed: &[ManagedObject],
    lattice_name: &str,
    value: f32,
) -> Result<usize> {
    let groups = gather_lattice_modifiers(scene, managed);
    let group = groups
        .get(lattice_name)
        .ok_or_else(|| Error::missing_group(lattice_name))?;

    let mut written = 0;
    for binding in &group.bindings {
        let settings = scene
            .object_mut(&binding.object_name)
            .and_then(|obj| obj.modifier_mut(&binding.modifier_name))
            .and_then(|modifier| modifier.as_lattice_mut());
        if let Some(settings) = settings {
            settings.strength = value;
            written += 1;
            debug!(
                "Set '{}' on '{}' to strength {}",
                binding.modifier_name, binding.object_name, value
            );
        }
    }
    Ok(written)
}
