use std::any::Any;

use glam::Vec3;

use crate::core::kind::EntityKind;
use crate::core::shape::CollisionShape;
use crate::effects::EffectScheduler;
use crate::events::EventQueue;
use crate::utils::EntityId;

/// Side-effect channels handed to entities during a tick: the per-frame
/// effect list for visual bursts and the event queue for host notifications.
pub struct TickContext<'a> {
    pub effects: &'a mut EffectScheduler,
    pub events: &'a mut EventQueue,
}

/// What a hit did to the receiving entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The entity does not take damage (scenery, shells).
    Unaffected,
    /// Damage applied, entity survives.
    Damaged,
    /// Damage applied and the entity was destroyed by it.
    Destroyed,
}

/// Capability contract for everything the collision system operates on.
///
/// Liveness and owner identity are part of the contract so the sweep never
/// inspects concrete types: an inactive entity is filtered out of pair
/// testing, and a shell's owner pair is skipped by id comparison alone.
pub trait Collidable: Any {
    /// Registry handle, [`EntityId::NULL`] until registered.
    fn id(&self) -> EntityId;

    /// Called once on registration to bind the registry handle.
    fn assign_id(&mut self, id: EntityId);

    fn kind(&self) -> EntityKind;

    fn shape(&self) -> CollisionShape;

    fn position(&self) -> Vec3;

    /// Entities reporting `false` are excluded from pair testing. Shells
    /// flip this permanently on destruction; tanks while destroyed.
    fn is_active(&self) -> bool {
        true
    }

    /// The firer for projectiles; pairs with the owner are never tested.
    fn owner(&self) -> Option<EntityId> {
        None
    }

    /// Per-tick self-mutation (motion, aging). Returning `false` asks the
    /// world to deregister the entity after this pass. Default: inert.
    fn advance(&mut self, _ctx: &mut TickContext<'_>) -> bool {
        true
    }

    /// Invoked by the sweep when an overlap with `other` is confirmed.
    fn on_collision(&mut self, _other: &mut dyn Collidable, _ctx: &mut TickContext<'_>) {}

    /// Damage intake; only tanks override this.
    fn take_damage(&mut self, _amount: i32) -> DamageOutcome {
        DamageOutcome::Unaffected
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
