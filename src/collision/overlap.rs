use glam::Vec3;

use crate::core::shape::CollisionShape;

/// Exact overlap test between two positioned shapes. Every combination is
/// strict: touching boundaries (distance equal to the radius sum, abutting
/// faces) do not collide.
pub fn shapes_overlap(a: &CollisionShape, pos_a: Vec3, b: &CollisionShape, pos_b: Vec3) -> bool {
    match (a, b) {
        (CollisionShape::Sphere { radius: ra }, CollisionShape::Sphere { radius: rb }) => {
            sphere_sphere(pos_a, *ra, pos_b, *rb)
        }
        (CollisionShape::Box { half_extents: ha }, CollisionShape::Box { half_extents: hb }) => {
            aabb_aabb(pos_a, *ha, pos_b, *hb)
        }
        (CollisionShape::Sphere { radius }, CollisionShape::Box { half_extents }) => {
            sphere_aabb(pos_a, *radius, pos_b, *half_extents)
        }
        (CollisionShape::Box { half_extents }, CollisionShape::Sphere { radius }) => {
            sphere_aabb(pos_b, *radius, pos_a, *half_extents)
        }
    }
}

fn sphere_sphere(center_a: Vec3, radius_a: f32, center_b: Vec3, radius_b: f32) -> bool {
    let sum = radius_a + radius_b;
    center_a.distance_squared(center_b) < sum * sum
}

fn aabb_aabb(center_a: Vec3, half_a: Vec3, center_b: Vec3, half_b: Vec3) -> bool {
    let delta = (center_a - center_b).abs();
    delta.cmplt(half_a + half_b).all()
}

fn sphere_aabb(center: Vec3, radius: f32, box_center: Vec3, half_extents: Vec3) -> bool {
    let closest = (center - box_center).clamp(-half_extents, half_extents) + box_center;
    center.distance_squared(closest) < radius * radius
}
