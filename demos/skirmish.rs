use barrage::*;

fn main() {
    let mut physics = CombatPhysics::new();

    let attacker = physics.register(Tank::new(Vec3::new(-30.0, 0.0, 0.0)));
    let defender = physics.register(Tank::new(Vec3::new(30.0, 0.0, 0.0)));
    physics.register(StaticCollider::new(
        Vec3::new(0.0, 0.0, 10.0),
        EntityKind::Rock,
        Some(3.0),
        None,
    ));

    // Four lobbed volleys, one every 150 ticks.
    let aim = Vec3::new(1.0, 0.3, 0.0);
    for tick in 0..600u32 {
        if tick % 150 == 0 {
            physics.fire_shell(attacker, Vec3::new(-28.0, 2.0, 0.0), aim, 1.0);
        }

        physics.tick();

        for event in physics.drain_events() {
            match event {
                CombatEvent::TargetHit {
                    target,
                    source,
                    damage,
                } => println!("tick {tick}: {source} hit {target} for {damage}"),
                CombatEvent::TargetDestroyed { target, source } => {
                    println!("tick {tick}: {source} destroyed {target}")
                }
            }
        }
    }

    if let Some(tank) = physics.world().get::<Tank>(defender) {
        println!(
            "defender health after the exchange: {} (destroyed: {})",
            tank.health(),
            tank.is_destroyed()
        );
    }
}
