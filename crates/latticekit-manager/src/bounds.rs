//! World-space bounding volume over a set of objects.

use glam::Vec3;
use latticekit_core::{Error, Result};
use latticekit_scene::SceneObject;

/// Anything whose bounding box can be placed in world space.
pub trait Bounded {
    /// The eight bounding box corners in world space.
    fn world_corners(&self) -> [Vec3; 8];
}

impl Bounded for SceneObject {
    fn world_corners(&self) -> [Vec3; 8] {
        SceneObject::world_corners(self)
    }
}

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Componentwise min/max over the world-space corners of every object.
///
/// Fails with an empty-input error when `objects` yields nothing; callers
/// are expected to check first and report, this is the backstop.
pub fn calculate_bounding_box<'a, T, I>(objects: I) -> Result<BoundingBox>
where
    T: Bounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut bounds: Option<BoundingBox> = None;

    for obj in objects {
        for corner in obj.world_corners() {
            match bounds.as_mut() {
                Some(b) => b.include(corner),
                None => bounds = Some(BoundingBox::new(corner, corner)),
            }
        }
    }

    bounds.ok_or_else(|| Error::empty_input("Calculate bounding box"))
}
