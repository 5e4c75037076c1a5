//! Fire-and-forget visual effects driven by a per-frame task list.

pub mod explosion;
pub mod scheduler;

pub use explosion::{Explosion, ExplosionParticle};
pub use scheduler::{EffectScheduler, FrameEffect};
