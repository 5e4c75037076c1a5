//! Global tuning constants for the Barrage combat core.

use glam::Vec3;

/// Downward velocity change applied to a shell each simulation tick.
pub const SHELL_GRAVITY_PER_TICK: f32 = 0.01;

/// Ticks a shell may fly before it self-destructs (20 s at 60 ticks/s).
pub const SHELL_MAX_LIFETIME_TICKS: u32 = 1200;

/// Collision sphere radius of a shell.
pub const SHELL_RADIUS: f32 = 0.2;

/// Collision sphere radius of a tank hull.
pub const TANK_RADIUS: f32 = 2.0;

/// Damage applied per confirmed shell hit; four hits destroy a fresh tank.
pub const SHELL_DAMAGE: i32 = 25;

/// Hit points of an undamaged tank.
pub const TANK_FULL_HEALTH: i32 = 100;

/// Number of past positions retained for a shell's visual trail.
pub const TRAIL_LENGTH: usize = 10;

/// Height of the ground plane; shells below it detonate.
pub const GROUND_HEIGHT: f32 = 0.0;

/// Frames an explosion burst lives before it is discarded.
pub const EXPLOSION_FRAMES: u32 = 20;

/// Particles spawned per explosion burst.
pub const EXPLOSION_PARTICLES: usize = 16;

/// Burst radius of the small explosion played when a shell expires mid-air.
pub const EXPLOSION_RADIUS_EXPIRY: f32 = 0.4;

/// Burst radius of the explosion played on ground impact.
pub const EXPLOSION_RADIUS_GROUND: f32 = 0.8;

/// Burst radius of the full-size explosion played on a target hit.
pub const EXPLOSION_RADIUS_IMPACT: f32 = 1.6;

/// Sample spacing for line-of-sight occlusion checks.
pub const LINE_OF_SIGHT_STEP: f32 = 5.0;

/// Default shape assigned to a static collider built without geometry.
pub const DEFAULT_STATIC_RADIUS: f32 = 1.0;

/// Warm palette endpoints for explosion particle colors (red to orange).
pub const EXPLOSION_COLOR_INNER: Vec3 = Vec3::new(1.0, 0.18, 0.04);
pub const EXPLOSION_COLOR_OUTER: Vec3 = Vec3::new(1.0, 0.62, 0.12);
