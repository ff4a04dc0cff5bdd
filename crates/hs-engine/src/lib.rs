//! Combat resolution engine for heartsim.
//!
//! Resolves repeated stochastic fights between a party of player
//! characters and a group of NPCs: d10 attack pools, the stress and
//! fallout state machine, the round loop, and statistics aggregation
//! across many independent trials. The engine does no I/O and raises
//! no errors once rosters are loaded; degenerate inputs (empty
//! rosters, round-limit timeouts) resolve to well-defined results.
//!
//! All randomness flows through the [`DieRoller`] seam, so runs are
//! reproducible from a single master seed.

/// Attack resolution for both sides of a fight.
pub mod attack;
/// Run configuration.
pub mod config;
/// The die-roller seam and its seeded implementation.
pub mod dice;
/// The round loop and single-combat driver.
pub mod encounter;
/// Damage application and the fallout state machine.
pub mod fallout;
/// The multi-combat orchestrator.
pub mod simulate;
/// Per-combat and cross-combat statistics.
pub mod stats;

pub use attack::{npc_attack, pc_attack};
pub use config::SimConfig;
pub use dice::{D10, DieRoller, SeededRoller};
pub use encounter::{Encounter, EncounterEvent, EncounterOutcome, EventKind};
pub use fallout::{FalloutReport, apply_damage};
pub use simulate::{Simulation, SimulationOutcome, run_simulation};
pub use stats::{AttackTally, CombatStats, DamageTaken, FalloutTally, SimulationResults};
