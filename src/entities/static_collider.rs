use std::any::Any;

use glam::Vec3;

use crate::core::collidable::Collidable;
use crate::core::kind::EntityKind;
use crate::core::shape::CollisionShape;
use crate::utils::EntityId;

/// Immutable collision proxy for non-simulated scenery (trees, rocks,
/// buildings, mountain bases). Geometry and kind are fixed at construction;
/// the terrain generator builds these once and registers them for the
/// session's lifetime.
pub struct StaticCollider {
    id: EntityId,
    position: Vec3,
    kind: EntityKind,
    shape: CollisionShape,
}

impl StaticCollider {
    /// Builds a proxy from the generator's optional geometry: a radius
    /// yields a sphere, otherwise a box size yields a box, otherwise a unit
    /// sphere. All inputs are accepted.
    pub fn new(
        position: Vec3,
        kind: EntityKind,
        radius: Option<f32>,
        half_extents: Option<Vec3>,
    ) -> Self {
        Self {
            id: EntityId::NULL,
            position,
            kind,
            shape: CollisionShape::from_options(radius, half_extents),
        }
    }

    pub fn sphere(position: Vec3, kind: EntityKind, radius: f32) -> Self {
        Self::new(position, kind, Some(radius), None)
    }

    pub fn cuboid(position: Vec3, kind: EntityKind, half_extents: Vec3) -> Self {
        Self::new(position, kind, None, Some(half_extents))
    }
}

impl Collidable for StaticCollider {
    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn shape(&self) -> CollisionShape {
        self.shape
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_wins_over_box_size() {
        let collider = StaticCollider::new(
            Vec3::ZERO,
            EntityKind::Rock,
            Some(2.5),
            Some(Vec3::splat(4.0)),
        );
        assert_eq!(collider.shape(), CollisionShape::Sphere { radius: 2.5 });
    }

    #[test]
    fn missing_geometry_defaults_to_a_unit_sphere() {
        let collider = StaticCollider::new(Vec3::ZERO, EntityKind::Tree, None, None);
        assert_eq!(collider.shape(), CollisionShape::Sphere { radius: 1.0 });
    }

    #[test]
    fn statics_are_always_active_and_unowned() {
        let collider = StaticCollider::cuboid(Vec3::ZERO, EntityKind::Building, Vec3::ONE);
        assert!(collider.is_active());
        assert_eq!(collider.owner(), None);
    }
}
