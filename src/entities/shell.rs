use std::any::Any;

use glam::Vec3;

use crate::config::{
    GROUND_HEIGHT, SHELL_DAMAGE, SHELL_GRAVITY_PER_TICK, SHELL_MAX_LIFETIME_TICKS, SHELL_RADIUS,
    TRAIL_LENGTH,
};
use crate::core::collidable::{Collidable, DamageOutcome, TickContext};
use crate::core::kind::EntityKind;
use crate::core::shape::CollisionShape;
use crate::effects::Explosion;
use crate::events::CombatEvent;
use crate::utils::EntityId;

/// Fixed-length ring of recent positions backing the shell's fading trail.
/// Purely visual; physics never reads it.
#[derive(Debug, Clone)]
pub struct Trail {
    slots: Vec<Vec3>,
}

impl Trail {
    fn new(origin: Vec3) -> Self {
        Self {
            slots: vec![origin; TRAIL_LENGTH],
        }
    }

    /// Shifts every slot back by one and records `position` at the front.
    fn record(&mut self, position: Vec3) {
        for i in (1..self.slots.len()).rev() {
            self.slots[i] = self.slots[i - 1];
        }
        if let Some(front) = self.slots.first_mut() {
            *front = position;
        }
    }

    /// Releases the trail's slots; called once when the shell's visuals
    /// leave the scene.
    fn release(&mut self) {
        self.slots.clear();
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.slots
    }
}

/// Point where a segment from `from` to `to` crosses the ground plane,
/// assuming `to` is below it. Falls back to clamping `to` when the segment
/// is degenerate.
fn ground_crossing(from: Vec3, to: Vec3) -> Vec3 {
    let descent = from.y - to.y;
    if descent <= f32::EPSILON {
        return Vec3::new(to.x, GROUND_HEIGHT, to.z);
    }
    let t = (from.y - GROUND_HEIGHT) / descent;
    let crossing = from.lerp(to, t.clamp(0.0, 1.0));
    Vec3::new(crossing.x, GROUND_HEIGHT, crossing.z)
}

/// A fired projectile: ballistic motion under per-tick gravity, a bounded
/// trail, a finite lifetime, and one-shot hit resolution.
///
/// The `active` latch is monotone. Every mutating path checks it first, so
/// a shell that has detonated (for any reason) is inert for the rest of its
/// registration.
pub struct Shell {
    id: EntityId,
    owner: EntityId,
    position: Vec3,
    velocity: Vec3,
    radius: f32,
    age: u32,
    active: bool,
    /// Normalized at fire time and kept for replay/synchronization; physics
    /// integrates `velocity` only.
    firing_direction: Vec3,
    trail: Trail,
}

impl Shell {
    /// Fires a shell owned by `owner` from `position` along `direction` at
    /// `speed` units per tick.
    pub fn fire(owner: EntityId, position: Vec3, direction: Vec3, speed: f32) -> Self {
        let firing_direction = direction.normalize_or_zero();
        if firing_direction == Vec3::ZERO {
            log::warn!("shell fired with zero direction from {owner}");
        }
        Self {
            id: EntityId::NULL,
            owner,
            position,
            velocity: firing_direction * speed,
            radius: SHELL_RADIUS,
            age: 0,
            active: true,
            firing_direction,
            trail: Trail::new(position),
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn firing_direction(&self) -> Vec3 {
        self.firing_direction
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Single teardown path shared by expiry, ground hit, and target hit:
    /// clears the latch and releases the visual trail.
    fn retire(&mut self) {
        debug_assert!(self.active, "shell retired twice");
        self.active = false;
        self.trail.release();
    }
}

impl Collidable for Shell {
    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Shell
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
        self.active
    }

    fn owner(&self) -> Option<EntityId> {
        Some(self.owner)
    }

    /// One tick of flight. Expiry is checked before motion, the ground after
    /// it, so at most one exit transition fires per tick. Returns `false`
    /// once the shell is done and should be deregistered.
    fn advance(&mut self, ctx: &mut TickContext<'_>) -> bool {
        if !self.active {
            return false;
        }

        self.age += 1;
        if self.age >= SHELL_MAX_LIFETIME_TICKS {
            log::debug!("shell {} expired after {} ticks", self.id, self.age);
            ctx.effects.spawn(Explosion::expiry(self.position));
            self.retire();
            return false;
        }

        // Semi-implicit Euler: gravity into velocity first, then position.
        self.velocity.y -= SHELL_GRAVITY_PER_TICK;
        let previous = self.position;
        self.position += self.velocity;
        self.trail.record(self.position);

        if self.position.y < GROUND_HEIGHT {
            let impact = ground_crossing(previous, self.position);
            log::debug!("shell {} hit ground at {impact}", self.id);
            ctx.effects.spawn(Explosion::ground(impact));
            self.retire();
            return false;
        }

        true
    }

    /// One-shot hit resolution. The latch is cleared before any side effect
    /// so a second overlapping pair in the same sweep finds the shell spent.
    fn on_collision(&mut self, other: &mut dyn Collidable, ctx: &mut TickContext<'_>) {
        if !self.active {
            return;
        }
        if other.id() == self.owner {
            return;
        }

        self.retire();
        ctx.effects.spawn(Explosion::impact(self.position));
        log::debug!(
            "shell {} detonated on {:?} {}",
            self.id,
            other.kind(),
            other.id()
        );

        if other.kind().is_tank() {
            let outcome = other.take_damage(SHELL_DAMAGE);
            ctx.events.push(CombatEvent::TargetHit {
                target: other.id(),
                source: self.owner,
                damage: SHELL_DAMAGE,
            });
            if outcome == DamageOutcome::Destroyed {
                ctx.events.push(CombatEvent::TargetDestroyed {
                    target: other.id(),
                    source: self.owner,
                });
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
