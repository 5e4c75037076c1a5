//! Core contracts: entity kinds, collision shapes, and the collidable capability.

pub mod collidable;
pub mod kind;
pub mod shape;

pub use collidable::{Collidable, DamageOutcome, TickContext};
pub use kind::EntityKind;
pub use shape::CollisionShape;
