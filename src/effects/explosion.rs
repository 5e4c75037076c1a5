use glam::Vec3;
use rand::Rng;

use crate::config::{
    EXPLOSION_COLOR_INNER, EXPLOSION_COLOR_OUTER, EXPLOSION_FRAMES, EXPLOSION_PARTICLES,
    EXPLOSION_RADIUS_EXPIRY, EXPLOSION_RADIUS_GROUND, EXPLOSION_RADIUS_IMPACT,
};
use crate::effects::scheduler::FrameEffect;

/// One fragment of an explosion burst: a fixed outward offset from the
/// origin and a warm color sampled between the palette endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ExplosionParticle {
    pub offset: Vec3,
    pub color: Vec3,
}

/// Timed particle burst played at a detonation point. Particles scale
/// outward with age and fade linearly to zero opacity over
/// [`EXPLOSION_FRAMES`] frames, after which the burst is discarded.
pub struct Explosion {
    origin: Vec3,
    base_radius: f32,
    frame: u32,
    particles: Vec<ExplosionParticle>,
}

impl Explosion {
    pub fn new(origin: Vec3, base_radius: f32) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..EXPLOSION_PARTICLES)
            .map(|_| {
                let direction = Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                )
                .normalize_or_zero();
                let spread = rng.gen_range(0.3..=1.0);
                ExplosionParticle {
                    offset: direction * base_radius * spread,
                    color: EXPLOSION_COLOR_INNER.lerp(EXPLOSION_COLOR_OUTER, rng.gen_range(0.0..=1.0)),
                }
            })
            .collect();

        Self {
            origin,
            base_radius,
            frame: 0,
            particles,
        }
    }

    /// Small burst for a shell that timed out mid-air.
    pub fn expiry(origin: Vec3) -> Self {
        Self::new(origin, EXPLOSION_RADIUS_EXPIRY)
    }

    /// Burst for a shell striking the ground plane.
    pub fn ground(origin: Vec3) -> Self {
        Self::new(origin, EXPLOSION_RADIUS_GROUND)
    }

    /// Full-size burst for a confirmed target hit.
    pub fn impact(origin: Vec3) -> Self {
        Self::new(origin, EXPLOSION_RADIUS_IMPACT)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn particles(&self) -> &[ExplosionParticle] {
        &self.particles
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Outward growth factor, 1.0 at birth up to 2.0 on the final frame.
    pub fn scale(&self) -> f32 {
        1.0 + self.frame as f32 / EXPLOSION_FRAMES as f32
    }

    /// Linear fade from 1.0 down to zero over the frame budget.
    pub fn opacity(&self) -> f32 {
        1.0 - self.frame as f32 / EXPLOSION_FRAMES as f32
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }
}

impl FrameEffect for Explosion {
    fn tick(&mut self) -> bool {
        self.frame += 1;
        self.frame < EXPLOSION_FRAMES
    }
}
