//! Resistance tracks and damage distributions.
//!
//! A player character carries five independent stress counters, each
//! clamped to [0, 12]. Incoming NPC damage is expressed as a
//! [`DamageDistribution`] with one slot per resistance type, so a miss
//! and a hit have the same shape (all five slots present, possibly zero).

use serde::{Deserialize, Serialize};

/// The saturation point of a resistance counter. Reaching it triggers
/// a fallout and clears the counter.
pub const STRESS_CAP: u32 = 12;

/// One of the five stress pools a player character can take damage to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistanceType {
    /// Physical harm.
    Blood,
    /// Supernatural corruption.
    Echo,
    /// Psychological strain.
    Mind,
    /// Luck running out.
    Fortune,
    /// Equipment and provisions.
    Supplies,
}

impl ResistanceType {
    /// All five resistance types, in the canonical iteration order.
    pub const ALL: [Self; 5] = [
        Self::Blood,
        Self::Echo,
        Self::Mind,
        Self::Fortune,
        Self::Supplies,
    ];

    /// Position of this type within [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Blood => 0,
            Self::Echo => 1,
            Self::Mind => 2,
            Self::Fortune => 3,
            Self::Supplies => 4,
        }
    }
}

impl std::fmt::Display for ResistanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blood => write!(f, "blood"),
            Self::Echo => write!(f, "echo"),
            Self::Mind => write!(f, "mind"),
            Self::Fortune => write!(f, "fortune"),
            Self::Supplies => write!(f, "supplies"),
        }
    }
}

/// A player character's five stress counters, each clamped to
/// [0, [`STRESS_CAP`]].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTrack")]
pub struct ResistanceTrack {
    /// Blood stress.
    pub blood: u32,
    /// Echo stress.
    pub echo: u32,
    /// Mind stress.
    pub mind: u32,
    /// Fortune stress.
    pub fortune: u32,
    /// Supplies stress.
    pub supplies: u32,
}

/// Unclamped form used during deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTrack {
    blood: u32,
    echo: u32,
    mind: u32,
    fortune: u32,
    supplies: u32,
}

impl From<RawTrack> for ResistanceTrack {
    fn from(raw: RawTrack) -> Self {
        Self {
            blood: raw.blood.min(STRESS_CAP),
            echo: raw.echo.min(STRESS_CAP),
            mind: raw.mind.min(STRESS_CAP),
            fortune: raw.fortune.min(STRESS_CAP),
            supplies: raw.supplies.min(STRESS_CAP),
        }
    }
}

impl ResistanceTrack {
    /// Current value of the counter for `kind`.
    pub fn get(&self, kind: ResistanceType) -> u32 {
        match kind {
            ResistanceType::Blood => self.blood,
            ResistanceType::Echo => self.echo,
            ResistanceType::Mind => self.mind,
            ResistanceType::Fortune => self.fortune,
            ResistanceType::Supplies => self.supplies,
        }
    }

    /// Set the counter for `kind`, clamping to [0, [`STRESS_CAP`]].
    pub fn set(&mut self, kind: ResistanceType, value: u32) {
        let clamped = value.min(STRESS_CAP);
        match kind {
            ResistanceType::Blood => self.blood = clamped,
            ResistanceType::Echo => self.echo = clamped,
            ResistanceType::Mind => self.mind = clamped,
            ResistanceType::Fortune => self.fortune = clamped,
            ResistanceType::Supplies => self.supplies = clamped,
        }
    }

    /// Add stress to the counter for `kind`, clamping at the cap.
    /// Returns the new value.
    pub fn add(&mut self, kind: ResistanceType, amount: u32) -> u32 {
        let new_value = self.get(kind).saturating_add(amount).min(STRESS_CAP);
        self.set(kind, new_value);
        new_value
    }

    /// Returns true if the counter for `kind` is at the cap.
    pub fn is_saturated(&self, kind: ResistanceType) -> bool {
        self.get(kind) >= STRESS_CAP
    }

    /// Clear every counter to zero (major fallout).
    pub fn clear_all(&mut self) {
        for kind in ResistanceType::ALL {
            self.set(kind, 0);
        }
    }
}

impl std::fmt::Display for ResistanceTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Blood {}, Echo {}, Mind {}, Fortune {}, Supplies {}",
            self.blood, self.echo, self.mind, self.fortune, self.supplies
        )
    }
}

/// Damage from a single NPC attack, split by resistance type.
///
/// All five slots are always present; a miss is a distribution of
/// zeros, a hit puts the whole amount into exactly one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageDistribution([u32; 5]);

impl DamageDistribution {
    /// The all-zero distribution (a miss).
    pub fn none() -> Self {
        Self::default()
    }

    /// A distribution with the whole `amount` assigned to `kind`.
    pub fn focused(kind: ResistanceType, amount: u32) -> Self {
        let mut dist = Self::default();
        dist.0[kind.index()] = amount;
        dist
    }

    /// Damage assigned to `kind`.
    pub fn get(&self, kind: ResistanceType) -> u32 {
        self.0[kind.index()]
    }

    /// Sum of damage across all five types.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns true if no slot carries damage.
    pub fn is_miss(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over `(type, damage)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ResistanceType, u32)> + '_ {
        ResistanceType::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }
}
