//! Names and ranges shared between the scene host and the manager.

/// Container that every lattice created by the manager lives in.
pub const LATTICE_COLLECTION_NAME: &str = "Lattices";

/// Root container of a scene. New objects are linked here on creation.
pub const SCENE_COLLECTION_NAME: &str = "Scene Collection";

/// Prefix for generated lattice names (`"Lattice 3"`).
pub const LATTICE_NAME_PREFIX: &str = "Lattice";

/// Lower bound of a lattice modifier strength.
pub const STRENGTH_MIN: f32 = 0.0;

/// Upper bound of a lattice modifier strength.
pub const STRENGTH_MAX: f32 = 1.0;

/// Clamps a strength value into `[STRENGTH_MIN, STRENGTH_MAX]`.
///
/// NaN collapses to `STRENGTH_MIN`.
pub fn clamp_strength(value: f32) -> f32 {
    if value.is_nan() {
        return STRENGTH_MIN;
    }
    value.clamp(STRENGTH_MIN, STRENGTH_MAX)
}
