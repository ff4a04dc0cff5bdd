//! Player characters and their capability sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::resistance::ResistanceTrack;

/// A named capability a player character may have. The `Kill` ability
/// grants a bonus attack die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Sway people with words.
    Compel,
    /// Navigate and explore the deep places.
    Delve,
    /// Notice what is hidden.
    Discern,
    /// Shrug off hardship.
    Endure,
    /// Get out of harm's way.
    Evade,
    /// Track and pursue prey.
    Hunt,
    /// Fight to the death. Grants a bonus attack die.
    Kill,
    /// Heal and repair.
    Mend,
    /// Move unseen.
    Sneak,
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compel => write!(f, "compel"),
            Self::Delve => write!(f, "delve"),
            Self::Discern => write!(f, "discern"),
            Self::Endure => write!(f, "endure"),
            Self::Evade => write!(f, "evade"),
            Self::Hunt => write!(f, "hunt"),
            Self::Kill => write!(f, "kill"),
            Self::Mend => write!(f, "mend"),
            Self::Sneak => write!(f, "sneak"),
        }
    }
}

/// A domain a character is attuned to. A PC sharing any domain with the
/// defending NPC rolls a bonus attack die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Blighted, hexed places.
    Cursed,
    /// Barren wastes.
    Desolate,
    /// Places of safety and community.
    Haven,
    /// Forbidden knowledge and ritual.
    Occult,
    /// Faith, temples, the divine.
    Religion,
    /// Machinery and invention. Accepts the legacy "techology"
    /// spelling found in older data files.
    #[serde(alias = "techology")]
    Technology,
    /// Tunnels and the spaces between.
    Warren,
    /// Untamed nature.
    Wild,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cursed => write!(f, "cursed"),
            Self::Desolate => write!(f, "desolate"),
            Self::Haven => write!(f, "haven"),
            Self::Occult => write!(f, "occult"),
            Self::Religion => write!(f, "religion"),
            Self::Technology => write!(f, "technology"),
            Self::Warren => write!(f, "warren"),
            Self::Wild => write!(f, "wild"),
        }
    }
}

/// A player character. Loaded once from data, then mutated during
/// combat (resistance and fallout counters only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PcRecord")]
pub struct Pc {
    /// Display name, used as the identity key in statistics.
    pub name: String,
    /// Character class (e.g. "Cleaver", "Deep Apiarist").
    pub class: String,
    /// The character's calling.
    pub calling: String,
    /// Abilities this character has.
    pub abilities: BTreeSet<Ability>,
    /// Domains this character is attuned to.
    pub domains: BTreeSet<Domain>,
    /// Weapon rating: the size of the damage die (0 means improvised,
    /// minimum 1 damage on a hit).
    pub weapon: u32,
    /// The five stress counters.
    pub resistance: ResistanceTrack,
    /// Minor fallouts suffered so far.
    pub minor_fallouts: u32,
    /// Major fallouts suffered so far. Two of them kill the character.
    pub major_fallouts: u32,
}

/// The on-disk shape of a PC. Fallout counters are combat state, not
/// data: every loaded character starts at zero so the engine's
/// minor/major lockstep always holds.
#[derive(Debug, Deserialize)]
struct PcRecord {
    name: String,
    class: String,
    calling: String,
    #[serde(default)]
    abilities: BTreeSet<Ability>,
    #[serde(default)]
    domains: BTreeSet<Domain>,
    weapon: u32,
    #[serde(default)]
    resistance: ResistanceTrack,
}

impl From<PcRecord> for Pc {
    fn from(record: PcRecord) -> Self {
        Self {
            name: record.name,
            class: record.class,
            calling: record.calling,
            abilities: record.abilities,
            domains: record.domains,
            weapon: record.weapon,
            resistance: record.resistance,
            minor_fallouts: 0,
            major_fallouts: 0,
        }
    }
}

impl Pc {
    /// A PC dies at two major fallouts.
    pub fn is_dead(&self) -> bool {
        self.major_fallouts >= 2
    }

    /// Returns true if this character has the given ability.
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    /// Returns true if any of this character's domains appears in
    /// `other` (the bonus-die test against an NPC's domain set).
    pub fn shares_domain(&self, other: &BTreeSet<Domain>) -> bool {
        !self.domains.is_disjoint(other)
    }
}
