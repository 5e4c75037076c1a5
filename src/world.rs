use glam::Vec3;

use crate::collision::{overlap::shapes_overlap, queries};
use crate::core::collidable::{Collidable, TickContext};
use crate::effects::EffectScheduler;
use crate::events::{CombatEvent, EventQueue};
use crate::utils::logging::ScopedTimer;
use crate::utils::{EntityId, Registry};

/// Central registry and per-tick driver for every collidable in the arena.
///
/// Entities are owned here behind generational handles; a handle kept after
/// deregistration is simply inert. One `tick` runs the fixed per-frame order:
/// advance projectiles, sweep pairs, then drive visual effects.
pub struct CombatWorld {
    entities: Registry<Box<dyn Collidable>>,
    events: EventQueue,
    effects: EffectScheduler,
}

impl Default for CombatWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatWorld {
    pub fn new() -> Self {
        Self {
            entities: Registry::new(),
            events: EventQueue::new(),
            effects: EffectScheduler::new(),
        }
    }

    /// Registers a collidable for future sweeps and binds its handle.
    ///
    /// Duplicates are not detected; registering the same entity twice makes
    /// both registrations independently testable and is a caller error.
    pub fn register(&mut self, entity: Box<dyn Collidable>) -> EntityId {
        let id = self.entities.insert(entity);
        if let Some(entity) = self.entities.get_mut(id) {
            entity.assign_id(id);
            log::debug!("registered {:?} as {id}", entity.kind());
        }
        id
    }

    /// Sugar over [`CombatWorld::register`] for concrete entity values.
    pub fn register_entity<C: Collidable>(&mut self, entity: C) -> EntityId {
        self.register(Box::new(entity))
    }

    /// Deregisters by handle; a stale or unknown handle is a silent no-op.
    pub fn deregister(&mut self, id: EntityId) -> Option<Box<dyn Collidable>> {
        let removed = self.entities.remove(id);
        if let Some(entity) = &removed {
            log::debug!("deregistered {:?} {id}", entity.kind());
        }
        removed
    }

    pub fn entity(&self, id: EntityId) -> Option<&dyn Collidable> {
        self.entities.get(id).map(|boxed| boxed.as_ref())
    }

    /// Typed access to a registered entity.
    pub fn get<C: Collidable>(&self, id: EntityId) -> Option<&C> {
        self.entities.get(id)?.as_any().downcast_ref::<C>()
    }

    /// Typed mutable access to a registered entity.
    pub fn get_mut<C: Collidable>(&mut self, id: EntityId) -> Option<&mut C> {
        self.entities.get_mut(id)?.as_any_mut().downcast_mut::<C>()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// One full simulation tick in the fixed order: advance, sweep, effects.
    pub fn tick(&mut self) {
        self.advance_shells();
        self.sweep();
        self.effects.tick_all();
    }

    /// Runs every entity's per-tick advance and deregisters those that
    /// report themselves finished (expired or detonated shells).
    ///
    /// Iterates a snapshot of the id set, so removal during the pass never
    /// corrupts the iteration.
    pub fn advance_shells(&mut self) {
        let _timer = ScopedTimer::new("shells::advance");

        let snapshot: Vec<EntityId> = self.entities.ids().collect();
        for id in snapshot {
            let alive = {
                let mut ctx = TickContext {
                    effects: &mut self.effects,
                    events: &mut self.events,
                };
                match self.entities.get_mut(id) {
                    Some(entity) => entity.advance(&mut ctx),
                    None => continue,
                }
            };

            if !alive {
                self.entities.remove(id);
            }
        }
    }

    /// One pairwise collision pass over the registered set.
    ///
    /// The id set is snapshotted up front and every lookup is re-validated
    /// against the live registry, so entities removed or deactivated
    /// mid-pass simply stop matching. Pair order is deterministic:
    /// ascending (i, j) with i < j over the snapshot.
    pub fn sweep(&mut self) {
        let _timer = ScopedTimer::new("collision::sweep");

        let candidates: Vec<EntityId> = {
            let snapshot: Vec<EntityId> = self.entities.ids().collect();
            snapshot
                .into_iter()
                .filter(|&id| {
                    self.entities
                        .get(id)
                        .map_or(false, |entity| entity.is_active())
                })
                .collect()
        };

        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                let (id_a, id_b) = (candidates[i], candidates[j]);

                let overlapping = {
                    let (Some(a), Some(b)) = (self.entities.get(id_a), self.entities.get(id_b))
                    else {
                        continue;
                    };
                    if !a.is_active() || !b.is_active() {
                        continue;
                    }
                    if Self::pair_skipped(a.as_ref(), id_a, b.as_ref(), id_b) {
                        continue;
                    }
                    shapes_overlap(&a.shape(), a.position(), &b.shape(), b.position())
                };

                if overlapping {
                    self.dispatch_pair(id_a, id_b);
                }
            }
        }
    }

    /// Pair-level skip policy: scenery never interacts with scenery, and a
    /// shell is never tested against its own firer.
    fn pair_skipped(a: &dyn Collidable, id_a: EntityId, b: &dyn Collidable, id_b: EntityId) -> bool {
        if a.kind().is_scenery() && b.kind().is_scenery() {
            return true;
        }
        a.owner() == Some(id_b) || b.owner() == Some(id_a)
    }

    /// Invokes both collision handlers for a confirmed overlap, shell side
    /// first: the shell's latch must settle before the other party's handler
    /// can observe it.
    fn dispatch_pair(&mut self, id_a: EntityId, id_b: EntityId) {
        let mut ctx = TickContext {
            effects: &mut self.effects,
            events: &mut self.events,
        };
        let Some((a, b)) = self.entities.get_pair_mut(id_a, id_b) else {
            return;
        };

        if b.kind().is_shell() && !a.kind().is_shell() {
            b.on_collision(a.as_mut(), &mut ctx);
            a.on_collision(b.as_mut(), &mut ctx);
        } else {
            a.on_collision(b.as_mut(), &mut ctx);
            b.on_collision(a.as_mut(), &mut ctx);
        }
    }

    /// First registered entity (other than `exclude`) containing `point`.
    pub fn check_point_collision(&self, point: Vec3, exclude: Option<EntityId>) -> Option<EntityId> {
        queries::point_hit(&self.entities, point, exclude)
    }

    /// Whether static scenery leaves the segment between two points clear.
    pub fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool {
        queries::line_of_sight(&self.entities, from, to)
    }

    /// Hands the tick's accumulated combat events to the host.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.events.drain()
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn effects(&self) -> &EffectScheduler {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut EffectScheduler {
        &mut self.effects
    }
}
