//! Scene objects and the modifiers attached to them.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Object type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Polygon mesh; the only kind the manager binds lattices to
    Mesh,
    /// Lattice deformer volume
    Lattice,
    /// Anything else (cameras, lights, empties)
    Other,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mesh => write!(f, "MESH"),
            Self::Lattice => write!(f, "LATTICE"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// Settings carried by a lattice-type modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeSettings {
    /// Target lattice object. `None` once the target has been deleted.
    #[serde(default)]
    pub object: Option<String>,
    /// Deformation strength in `[0.0, 1.0]`.
    pub strength: f32,
}

/// Modifier type and its type-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Lattice deform modifier
    Lattice(LatticeSettings),
    /// Any other modifier, identified by its host type name
    Other(String),
}

/// A named modifier on an object's modifier stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub kind: ModifierKind,
}

impl Modifier {
    /// Creates a lattice modifier targeting `target`.
    pub fn lattice(name: impl Into<String>, target: impl Into<String>, strength: f32) -> Self {
        Self {
            name: name.into(),
            kind: ModifierKind::Lattice(LatticeSettings {
                object: Some(target.into()),
                strength,
            }),
        }
    }

    /// Creates a non-lattice modifier of the given host type.
    pub fn other(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ModifierKind::Other(type_name.into()),
        }
    }

    /// Lattice settings, if this is a lattice modifier.
    pub fn as_lattice(&self) -> Option<&LatticeSettings> {
        match &self.kind {
            ModifierKind::Lattice(settings) => Some(settings),
            ModifierKind::Other(_) => None,
        }
    }

    /// Mutable lattice settings, if this is a lattice modifier.
    pub fn as_lattice_mut(&mut self) -> Option<&mut LatticeSettings> {
        match &mut self.kind {
            ModifierKind::Lattice(settings) => Some(settings),
            ModifierKind::Other(_) => None,
        }
    }
}

/// The eight corners of an axis-aligned box, in the host's corner order.
pub fn box_corners(min: Vec3, max: Vec3) -> [Vec3; 8] {
    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(max.x, max.y, min.z),
    ]
}

/// Corners of the unit cube centred on the origin (±0.5).
pub fn unit_cube_corners() -> [Vec3; 8] {
    box_corners(Vec3::splat(-0.5), Vec3::splat(0.5))
}

/// An object in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub location: Vec3,
    #[serde(default)]
    pub rotation: Quat,
    pub scale: Vec3,
    /// Local-space bounding box corners.
    pub bound_box: [Vec3; 8],
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub hide_viewport: bool,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Names of modifiers that have been baked into this object's geometry,
    /// oldest first.
    #[serde(default)]
    pub applied_modifiers: Vec<String>,
}

impl SceneObject {
    /// Creates an object of `kind` at the origin with unit scale and unit
    /// cube bounds.
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            bound_box: unit_cube_corners(),
            selected: false,
            hide_viewport: false,
            modifiers: Vec::new(),
            applied_modifiers: Vec::new(),
        }
    }

    /// Creates a mesh with unit cube bounds.
    pub fn mesh(name: impl Into<String>) -> Self {
        Self::new(name, ObjectKind::Mesh)
    }

    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bounds(mut self, min: Vec3, max: Vec3) -> Self {
        self.bound_box = box_corners(min, max);
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    pub fn is_lattice(&self) -> bool {
        self.kind == ObjectKind::Lattice
    }

    /// Object-to-world transform.
    pub fn matrix_world(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.location)
    }

    /// Bounding box corners transformed into world space.
    pub fn world_corners(&self) -> [Vec3; 8] {
        let matrix = self.matrix_world();
        self.bound_box.map(|corner| matrix.transform_point3(corner))
    }

    pub fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name == name)
    }

    pub fn modifier_mut(&mut self, name: &str) -> Option<&mut Modifier> {
        self.modifiers.iter_mut().find(|m| m.name == name)
    }

    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifier(name).is_some()
    }

    /// Lattice modifiers on the stack, in stack order.
    pub fn lattice_modifiers(&self) -> impl Iterator<Item = (&Modifier, &LatticeSettings)> {
        self.modifiers
            .iter()
            .filter_map(|m| m.as_lattice().map(|settings| (m, settings)))
    }
}
