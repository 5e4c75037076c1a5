use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_STATIC_RADIUS;

/// Collision geometry of an entity, centered on its current position.
///
/// Only spheres and axis-aligned boxes exist; every pair combination has an
/// exact overlap test in [`crate::collision::overlap`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl CollisionShape {
    pub fn sphere(radius: f32) -> Self {
        CollisionShape::Sphere { radius }
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        CollisionShape::Box { half_extents }
    }

    /// Shape selection for statics built from optional geometry: a supplied
    /// radius wins over a supplied box size, and a unit sphere covers the
    /// case where neither was given.
    pub fn from_options(radius: Option<f32>, half_extents: Option<Vec3>) -> Self {
        match (radius, half_extents) {
            (Some(radius), _) => CollisionShape::Sphere { radius },
            (None, Some(half_extents)) => CollisionShape::Box { half_extents },
            (None, None) => CollisionShape::Sphere {
                radius: DEFAULT_STATIC_RADIUS,
            },
        }
    }

    /// Radius of the tightest sphere enclosing the shape.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            CollisionShape::Sphere { radius } => *radius,
            CollisionShape::Box { half_extents } => half_extents.length(),
        }
    }

    /// Strict containment test against a shape centered at `center`.
    pub fn contains_point(&self, center: Vec3, point: Vec3) -> bool {
        match self {
            CollisionShape::Sphere { radius } => {
                center.distance_squared(point) < radius * radius
            }
            CollisionShape::Box { half_extents } => {
                let delta = (point - center).abs();
                delta.cmplt(*half_extents).all()
            }
        }
    }
}
