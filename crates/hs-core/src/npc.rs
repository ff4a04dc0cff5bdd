//! Non-player characters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pc::Domain;

/// An adversary. Carries a single pooled resistance value instead of a
/// PC's five stress counters, plus flat protection against damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NpcRecord")]
pub struct Npc {
    /// Display name, used as the identity key in statistics.
    pub name: String,
    /// Weapon rating: the size of the damage die (0 means minimum 1
    /// damage on a hit).
    pub weapon: u32,
    /// Domains this creature belongs to.
    pub domains: BTreeSet<Domain>,
    /// Remaining resistance. The NPC is defeated at zero.
    pub resistance: u32,
    /// Flat reduction applied to incoming damage.
    pub protection: u32,
    /// Resistance at creation, kept for reporting.
    pub max_resistance: u32,
}

/// The on-disk shape of an NPC; `max_resistance` is captured from the
/// starting resistance at load time rather than stored in data files.
#[derive(Debug, Deserialize)]
struct NpcRecord {
    name: String,
    weapon: u32,
    #[serde(default)]
    domains: BTreeSet<Domain>,
    resistance: u32,
    protection: u32,
}

impl From<NpcRecord> for Npc {
    fn from(record: NpcRecord) -> Self {
        Self::new(
            record.name,
            record.weapon,
            record.domains,
            record.resistance,
            record.protection,
        )
    }
}

impl Npc {
    /// Create an NPC, capturing `max_resistance` from the starting
    /// resistance.
    pub fn new(
        name: impl Into<String>,
        weapon: u32,
        domains: BTreeSet<Domain>,
        resistance: u32,
        protection: u32,
    ) -> Self {
        Self {
            name: name.into(),
            weapon,
            domains,
            resistance,
            protection,
            max_resistance: resistance,
        }
    }

    /// An NPC is defeated when its resistance runs out.
    pub fn is_defeated(&self) -> bool {
        self.resistance == 0
    }

    /// Apply incoming damage after protection, flooring resistance at
    /// zero. Returns the damage that actually got through.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let actual = damage.saturating_sub(self.protection);
        self.resistance = self.resistance.saturating_sub(actual);
        actual
    }
}

impl std::fmt::Display for Npc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{} resistance", self.name, self.resistance, self.max_resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_npc(name: &str, resistance: u32, protection: u32) -> Npc {
        Npc::new(
            name,
            4,
            BTreeSet::from([Domain::Cursed]),
            resistance,
            protection,
        )
    }

    #[test]
    fn max_resistance_captured_at_creation() {
        let npc = sample_npc("Heartsblood Hound", 10, 1);
        assert_eq!(npc.max_resistance, 10);
        assert_eq!(npc.resistance, 10);
    }

    #[test]
    fn protection_reduces_damage() {
        let mut npc = sample_npc("Gnoll", 10, 2);
        assert_eq!(npc.take_damage(5), 3);
        assert_eq!(npc.resistance, 7);
    }

    #[test]
    fn protection_can_absorb_everything() {
        let mut npc = sample_npc("Knucklebone Brute", 10, 4);
        assert_eq!(npc.take_damage(3), 0);
        assert_eq!(npc.resistance, 10);
    }

    #[test]
    fn resistance_floors_at_zero() {
        let mut npc = sample_npc("Husk", 3, 0);
        npc.take_damage(9);
        assert_eq!(npc.resistance, 0);
        assert!(npc.is_defeated());
    }

    #[test]
    fn deserialize_captures_max_resistance() {
        let npc: Npc = serde_json::from_str(
            r#"{
                "name": "Spire Wraith",
                "weapon": 6,
                "domains": ["occult", "cursed"],
                "resistance": 14,
                "protection": 1
            }"#,
        )
        .unwrap();
        assert_eq!(npc.max_resistance, 14);
        assert!(npc.domains.contains(&Domain::Occult));
    }

    #[test]
    fn display_shows_remaining_resistance() {
        let mut npc = sample_npc("Husk", 8, 0);
        npc.take_damage(3);
        assert_eq!(npc.to_string(), "Husk: 5/8 resistance");
    }
}
