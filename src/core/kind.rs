use serde::{Deserialize, Serialize};

/// Closed vocabulary of everything that can participate in collision testing.
///
/// Pair policy (which pairs are skipped, which kinds take damage) lives here
/// so the sweep and the shell handler dispatch on one table instead of
/// scattering tag comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Shell,
    Tank,
    NpcTank,
    Tree,
    Rock,
    Building,
    Mountain,
}

impl EntityKind {
    /// Non-simulated scenery. Scenery-scenery pairs are never tested.
    pub fn is_scenery(self) -> bool {
        matches!(
            self,
            EntityKind::Tree | EntityKind::Rock | EntityKind::Building | EntityKind::Mountain
        )
    }

    /// Kinds that take shell damage.
    pub fn is_tank(self) -> bool {
        matches!(self, EntityKind::Tank | EntityKind::NpcTank)
    }

    pub fn is_shell(self) -> bool {
        matches!(self, EntityKind::Shell)
    }
}
