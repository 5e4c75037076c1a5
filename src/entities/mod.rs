//! Concrete collidable participants: scenery proxies, shells, and tanks.

pub mod shell;
pub mod static_collider;
pub mod tank;

pub use shell::{Shell, Trail};
pub use static_collider::StaticCollider;
pub use tank::Tank;
