//! Core types for heartsim: player characters, NPCs, and resistance
//! tracks.
//!
//! Characters are immutable at load and mutated only during combat
//! (stress counters, fallout tallies, NPC resistance). Data files are
//! one JSON record per character; the loaders skip malformed files
//! rather than failing the batch.

pub mod error;
pub mod load;
pub mod npc;
pub mod pc;
pub mod resistance;

pub use error::{LoadError, SkippedFile};
pub use load::{LoadOutcome, load_npcs, load_pcs};
pub use npc::Npc;
pub use pc::{Ability, Domain, Pc};
pub use resistance::{DamageDistribution, ResistanceTrack, ResistanceType, STRESS_CAP};
