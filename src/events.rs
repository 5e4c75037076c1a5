//! Notifications emitted on confirmed hits, drained by the host each tick.

use serde::{Deserialize, Serialize};

use crate::utils::EntityId;

/// Externally observable outcome of a shell strike. Delivery is synchronous:
/// events pushed during a tick are available to the host before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatEvent {
    /// A shell struck a damageable target.
    TargetHit {
        target: EntityId,
        source: EntityId,
        damage: i32,
    },
    /// The hit reduced the target to zero health.
    TargetDestroyed { target: EntityId, source: EntityId },
}

/// FIFO queue of combat events for the current tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<CombatEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Hands the accumulated events to the caller and leaves the queue empty.
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
