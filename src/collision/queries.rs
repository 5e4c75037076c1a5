use glam::Vec3;

use crate::config::LINE_OF_SIGHT_STEP;
use crate::core::collidable::Collidable;
use crate::utils::{EntityId, Registry};

/// Linear scan for the first registered entity whose shape contains `point`,
/// skipping `exclude`. Registration order (ascending slot) decides ties.
/// Used for placement validation, not by the sweep.
pub fn point_hit(
    entities: &Registry<Box<dyn Collidable>>,
    point: Vec3,
    exclude: Option<EntityId>,
) -> Option<EntityId> {
    entities
        .iter()
        .filter(|(id, _)| Some(*id) != exclude)
        .find(|(_, entity)| entity.shape().contains_point(entity.position(), point))
        .map(|(id, _)| id)
}

/// Step-sampled occlusion test between two points against static scenery.
/// Shells and tanks never block sight. Samples every
/// [`LINE_OF_SIGHT_STEP`] units along the segment, endpoint included.
pub fn line_of_sight(entities: &Registry<Box<dyn Collidable>>, from: Vec3, to: Vec3) -> bool {
    let span = to - from;
    let distance = span.length();
    if distance < f32::EPSILON {
        return true;
    }
    let direction = span / distance;

    let steps = (distance / LINE_OF_SIGHT_STEP).ceil() as u32;
    for step in 1..=steps {
        let along = (step as f32 * LINE_OF_SIGHT_STEP).min(distance);
        let sample = from + direction * along;

        for (_, entity) in entities.iter() {
            if !entity.kind().is_scenery() {
                continue;
            }
            if entity.shape().contains_point(entity.position(), sample) {
                return false;
            }
        }
    }

    true
}
