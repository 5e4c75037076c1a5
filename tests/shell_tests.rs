use barrage::config::{
    EXPLOSION_FRAMES, SHELL_GRAVITY_PER_TICK, SHELL_MAX_LIFETIME_TICKS, TRAIL_LENGTH,
};
use barrage::*;

use approx::assert_relative_eq;

#[test]
fn unobstructed_flight_follows_semi_implicit_euler() {
    let mut physics = CombatPhysics::new();
    let start = Vec3::new(0.0, 100.0, 0.0);
    let shell = physics.fire_shell(EntityId::NULL, start, Vec3::X, 2.0);

    let ticks = 50;
    for _ in 0..ticks {
        physics.tick();
    }

    let shell = physics.world().get::<Shell>(shell).expect("still flying");
    assert_relative_eq!(
        shell.velocity().y,
        -(ticks as f32) * SHELL_GRAVITY_PER_TICK,
        epsilon = 1e-4
    );

    // Horizontal motion is unaffected by gravity.
    assert_relative_eq!(shell.position().x, 2.0 * ticks as f32, epsilon = 1e-3);

    // Vertical drop is the cumulative sum of per-tick velocities, not the
    // analytic parabola.
    let mut expected_y = start.y;
    let mut vy = 0.0;
    for _ in 0..ticks {
        vy -= SHELL_GRAVITY_PER_TICK;
        expected_y += vy;
    }
    assert_relative_eq!(shell.position().y, expected_y, epsilon = 1e-3);
}

#[test]
fn shell_is_deregistered_when_it_hits_the_ground() {
    let mut physics = CombatPhysics::new();
    let shell = physics.fire_shell(
        EntityId::NULL,
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        2.0,
    );

    physics.tick();

    assert!(physics.world().entity(shell).is_none());
    assert_eq!(physics.world().effects().len(), 1, "ground burst scheduled");
}

#[test]
fn ground_burst_runs_its_frame_budget_then_disappears() {
    let mut physics = CombatPhysics::new();
    physics.fire_shell(
        EntityId::NULL,
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        2.0,
    );

    physics.tick();
    assert_eq!(physics.world().effects().len(), 1);

    // The impact tick already advanced the burst once.
    for _ in 0..EXPLOSION_FRAMES - 1 {
        physics.tick();
    }
    assert!(physics.world().effects().is_empty());
}

#[test]
fn shell_expires_exactly_at_the_lifetime_cap() {
    let mut physics = CombatPhysics::new();
    // Fired upward fast enough that the cap strikes before the ground does.
    let shell = physics.fire_shell(EntityId::NULL, Vec3::new(0.0, 10.0, 0.0), Vec3::Y, 20.0);

    for tick in 1..SHELL_MAX_LIFETIME_TICKS {
        physics.tick();
        assert!(
            physics.world().entity(shell).is_some(),
            "shell vanished early at tick {tick}"
        );
    }

    physics.tick();
    assert!(physics.world().entity(shell).is_none());
    assert_eq!(
        physics.world().effects().len(),
        1,
        "single expiry burst, nothing else"
    );
}

#[test]
fn trail_keeps_its_slot_count_while_flying() {
    let mut physics = CombatPhysics::new();
    let shell = physics.fire_shell(EntityId::NULL, Vec3::new(0.0, 100.0, 0.0), Vec3::X, 1.0);

    for _ in 0..3 {
        physics.tick();
    }

    let shell = physics.world().get::<Shell>(shell).unwrap();
    let trail = shell.trail().positions();
    assert_eq!(trail.len(), TRAIL_LENGTH);
    assert_eq!(trail[0], shell.position());
}

#[test]
fn cached_firing_direction_survives_flight() {
    let mut physics = CombatPhysics::new();
    let direction = Vec3::new(3.0, 4.0, 0.0);
    let shell = physics.fire_shell(EntityId::NULL, Vec3::new(0.0, 100.0, 0.0), direction, 5.0);

    for _ in 0..20 {
        physics.tick();
    }

    let shell = physics.world().get::<Shell>(shell).unwrap();
    let cached = shell.firing_direction();
    assert_relative_eq!(cached.x, 0.6, epsilon = 1e-6);
    assert_relative_eq!(cached.y, 0.8, epsilon = 1e-6);
    assert!(
        shell.velocity().y < 4.0,
        "integrated velocity dropped while the cached direction did not"
    );
}
