use std::any::Any;

use glam::Vec3;

use crate::config::{TANK_FULL_HEALTH, TANK_RADIUS};
use crate::core::collidable::{Collidable, DamageOutcome};
use crate::core::kind::EntityKind;
use crate::core::shape::CollisionShape;
use crate::utils::EntityId;

/// Damageable tank participant. Movement and control belong to the host;
/// this type carries what the collision core needs: position, hull sphere,
/// health, and the destroyed latch. Hosts with their own tank state can
/// implement [`Collidable`] directly instead.
pub struct Tank {
    id: EntityId,
    position: Vec3,
    radius: f32,
    health: i32,
    destroyed: bool,
    kind: EntityKind,
}

impl Tank {
    pub fn new(position: Vec3) -> Self {
        Self {
            id: EntityId::NULL,
            position,
            radius: TANK_RADIUS,
            health: TANK_FULL_HEALTH,
            destroyed: false,
            kind: EntityKind::Tank,
        }
    }

    /// A computer-driven tank; identical combat rules, distinct kind tag.
    pub fn npc(position: Vec3) -> Self {
        Self {
            kind: EntityKind::NpcTank,
            ..Self::new(position)
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Host-side respawn support: restores full health and the active state.
    pub fn restore(&mut self, position: Vec3) {
        self.position = position;
        self.health = TANK_FULL_HEALTH;
        self.destroyed = false;
    }
}

impl Collidable for Tank {
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
        CollisionShape::Sphere {
            radius: self.radius,
        }
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_active(&self) -> bool {
        !self.destroyed
    }

    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.destroyed {
            return DamageOutcome::Unaffected;
        }

        self.health -= amount;
        log::debug!("tank {} health now {}", self.id, self.health.max(0));

        if self.health <= 0 {
            self.health = 0;
            self.destroyed = true;
            DamageOutcome::Destroyed
        } else {
            DamageOutcome::Damaged
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
