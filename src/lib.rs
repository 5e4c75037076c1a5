//! Barrage – collision detection and projectile physics for a 3D tank
//! combat game.
//!
//! The crate is the frame-synchronous core that decides which entities touch,
//! which pairs are skipped by policy, and what happens to a fired shell over
//! its lifetime: ballistic flight, trail history, expiry, ground impact, and
//! one-shot hit resolution. Hosts register anything implementing
//! [`Collidable`], call [`CombatPhysics::tick`] once per simulation frame,
//! and drain [`CombatEvent`]s for damage and destruction notifications.

pub mod collision;
pub mod config;
pub mod core;
pub mod effects;
pub mod entities;
pub mod events;
pub mod utils;
pub mod world;

pub use glam::Vec3;

pub use collision::shapes_overlap;
pub use effects::{EffectScheduler, Explosion, ExplosionParticle, FrameEffect};
pub use self::core::{Collidable, CollisionShape, DamageOutcome, EntityKind, TickContext};
pub use entities::{Shell, StaticCollider, Tank, Trail};
pub use events::{CombatEvent, EventQueue};
pub use utils::{EntityId, Registry};
pub use world::CombatWorld;

/// High-level convenience wrapper that owns a [`CombatWorld`].
pub struct CombatPhysics {
    world: CombatWorld,
}

impl Default for CombatPhysics {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatPhysics {
    pub fn new() -> Self {
        Self {
            world: CombatWorld::new(),
        }
    }

    /// Registers a collidable participant and returns its handle.
    pub fn register<C: Collidable>(&mut self, entity: C) -> EntityId {
        self.world.register_entity(entity)
    }

    /// Deregisters a participant; stale handles are ignored.
    pub fn deregister(&mut self, id: EntityId) {
        self.world.deregister(id);
    }

    /// Fires a shell owned by `owner` and registers it for collision.
    pub fn fire_shell(
        &mut self,
        owner: EntityId,
        position: Vec3,
        direction: Vec3,
        speed: f32,
    ) -> EntityId {
        self.world
            .register_entity(Shell::fire(owner, position, direction, speed))
    }

    /// Advances the simulation by one tick: shell flight, the collision
    /// sweep, then visual effects.
    pub fn tick(&mut self) {
        self.world.tick();
    }

    /// Combat notifications accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.world.drain_events()
    }

    pub fn world(&self) -> &CombatWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut CombatWorld {
        &mut self.world
    }
}
