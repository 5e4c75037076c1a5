use std::any::Any;

use barrage::config::{SHELL_DAMAGE, TANK_FULL_HEALTH};
use barrage::*;

fn spawn_tank(world: &mut CombatWorld, position: Vec3) -> EntityId {
    world.register_entity(Tank::new(position))
}

fn spawn_scenery(world: &mut CombatWorld, kind: EntityKind, position: Vec3) -> EntityId {
    world.register_entity(StaticCollider::new(position, kind, Some(2.0), None))
}

#[test]
fn shell_resolves_against_at_most_one_target_per_sweep() {
    let mut world = CombatWorld::new();
    let owner = spawn_tank(&mut world, Vec3::new(100.0, 0.0, 0.0));
    let first = spawn_tank(&mut world, Vec3::new(1.0, 0.0, 0.0));
    let second = spawn_tank(&mut world, Vec3::new(-1.0, 0.0, 0.0));
    // Overlaps both tanks at once.
    world.register_entity(Shell::fire(owner, Vec3::new(0.0, 0.5, 0.0), Vec3::X, 1.0));

    world.sweep();

    let first_health = world.get::<Tank>(first).unwrap().health();
    let second_health = world.get::<Tank>(second).unwrap().health();
    assert_eq!(
        first_health + second_health,
        2 * TANK_FULL_HEALTH - SHELL_DAMAGE,
        "exactly one tank takes exactly one hit"
    );

    let events = world.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], CombatEvent::TargetHit { damage, .. } if damage == SHELL_DAMAGE));
}

#[test]
fn shell_never_hits_its_owner() {
    let mut world = CombatWorld::new();
    let owner = spawn_tank(&mut world, Vec3::ZERO);
    let shell = world.register_entity(Shell::fire(owner, Vec3::new(0.5, 0.5, 0.0), Vec3::X, 1.0));

    world.sweep();

    assert_eq!(world.get::<Tank>(owner).unwrap().health(), TANK_FULL_HEALTH);
    assert!(world.entity(shell).unwrap().is_active());
    assert!(world.drain_events().is_empty());
}

#[test]
fn scenery_pairs_are_never_tested() {
    let mut world = CombatWorld::new();
    // All mutually overlapping static scenery, mixed kinds included.
    for kind in [
        EntityKind::Tree,
        EntityKind::Rock,
        EntityKind::Building,
        EntityKind::Tree,
        EntityKind::Mountain,
    ] {
        spawn_scenery(&mut world, kind, Vec3::ZERO);
    }

    world.sweep();

    assert!(world.drain_events().is_empty());
    assert!(world.effects().is_empty());
    assert_eq!(world.len(), 5, "statics are never consumed by the sweep");
}

#[test]
fn shell_detonates_on_scenery_without_emitting_combat_events() {
    let mut world = CombatWorld::new();
    let rock = spawn_scenery(&mut world, EntityKind::Rock, Vec3::ZERO);
    let shell = world.register_entity(Shell::fire(
        EntityId::NULL,
        Vec3::new(1.0, 0.5, 0.0),
        Vec3::X,
        1.0,
    ));

    world.sweep();

    assert!(!world.entity(shell).unwrap().is_active());
    assert_eq!(world.effects().len(), 1, "impact explosion spawned");
    assert!(world.drain_events().is_empty(), "rocks emit no hit events");
    assert!(world.entity(rock).is_some());
}

#[test]
fn four_hits_destroy_and_later_shells_pass_through() {
    let mut world = CombatWorld::new();
    let owner = spawn_tank(&mut world, Vec3::new(100.0, 0.0, 0.0));
    let target = spawn_tank(&mut world, Vec3::ZERO);

    for volley in 1..=4 {
        world.register_entity(Shell::fire(owner, Vec3::new(0.0, 0.5, 0.0), Vec3::X, 1.0));
        world.sweep();

        let events = world.drain_events();
        if volley < 4 {
            assert_eq!(events.len(), 1, "volley {volley} lands one hit");
        } else {
            assert_eq!(events.len(), 2, "lethal volley adds the destroyed event");
            assert!(matches!(events[0], CombatEvent::TargetHit { .. }));
            assert!(
                matches!(events[1], CombatEvent::TargetDestroyed { target: t, source } if t == target && source == owner)
            );
        }
    }

    assert!(world.get::<Tank>(target).unwrap().is_destroyed());

    // A destroyed tank is filtered out of pair testing entirely.
    let late_shell = world.register_entity(Shell::fire(owner, Vec3::new(0.0, 0.5, 0.0), Vec3::X, 1.0));
    world.sweep();
    assert!(world.entity(late_shell).unwrap().is_active());
    assert!(world.drain_events().is_empty());
}

#[test]
fn two_shells_may_both_resolve_against_one_tank_in_a_sweep() {
    let mut world = CombatWorld::new();
    let owner = spawn_tank(&mut world, Vec3::new(100.0, 0.0, 0.0));
    let target = spawn_tank(&mut world, Vec3::ZERO);
    world.register_entity(Shell::fire(owner, Vec3::new(1.0, 0.5, 0.0), Vec3::X, 1.0));
    world.register_entity(Shell::fire(owner, Vec3::new(-1.0, 0.5, 0.0), Vec3::X, 1.0));

    world.sweep();

    assert_eq!(
        world.get::<Tank>(target).unwrap().health(),
        TANK_FULL_HEALTH - 2 * SHELL_DAMAGE
    );
    assert_eq!(world.drain_events().len(), 2);
}

/// Tank-kind observer that records the liveness of whatever strikes it.
struct Observer {
    id: EntityId,
    position: Vec3,
    saw_live_attacker: Option<bool>,
}

impl Observer {
    fn new(position: Vec3) -> Self {
        Self {
            id: EntityId::NULL,
            position,
            saw_live_attacker: None,
        }
    }
}

impl Collidable for Observer {
    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Tank
    }

    fn shape(&self) -> CollisionShape {
        CollisionShape::sphere(2.0)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn on_collision(&mut self, other: &mut dyn Collidable, _ctx: &mut TickContext<'_>) {
        self.saw_live_attacker = Some(other.is_active());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn shell_handler_runs_before_the_other_party_observes_it() {
    let mut world = CombatWorld::new();
    let observer = world.register_entity(Observer::new(Vec3::ZERO));
    world.register_entity(Shell::fire(
        EntityId::NULL,
        Vec3::new(0.5, 0.5, 0.0),
        Vec3::X,
        1.0,
    ));

    world.sweep();

    assert_eq!(
        world.get::<Observer>(observer).unwrap().saw_live_attacker,
        Some(false),
        "shell latch settles before the target's handler runs"
    );
}

#[test]
fn colliding_shells_destroy_each_other() {
    let mut world = CombatWorld::new();
    let a = world.register_entity(Shell::fire(
        EntityId::NULL,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::X,
        1.0,
    ));
    let b = world.register_entity(Shell::fire(
        EntityId::NULL,
        Vec3::new(0.1, 1.0, 0.0),
        Vec3::NEG_X,
        1.0,
    ));

    world.sweep();

    assert!(!world.entity(a).unwrap().is_active());
    assert!(!world.entity(b).unwrap().is_active());
    assert_eq!(world.effects().len(), 2);
    assert!(world.drain_events().is_empty());
}
