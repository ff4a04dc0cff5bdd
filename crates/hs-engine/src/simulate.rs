//! The multi-combat orchestrator.
//!
//! Owns the pristine rosters, clones them fresh for every trial so no
//! mutation leaks between fights, and folds each finished fight into
//! the cumulative results. Trial `i` rolls with its own source seeded
//! from `master_seed + i`, so a whole run replays exactly from one
//! seed.

use hs_core::{Npc, Pc};

use crate::config::SimConfig;
use crate::dice::SeededRoller;
use crate::encounter::{Encounter, EncounterOutcome};
use crate::stats::SimulationResults;

/// A batch of independent combat trials over fixed rosters.
#[derive(Debug)]
pub struct Simulation {
    baseline_pcs: Vec<Pc>,
    baseline_npcs: Vec<Npc>,
    config: SimConfig,
}

/// What a simulation run produced: cumulative results for a batch, or
/// the single encounter itself when only one fight was asked for.
#[derive(Debug)]
pub enum SimulationOutcome {
    /// One fight: the outcome plus the finished encounter for
    /// inspection.
    Single {
        /// How the fight ended.
        outcome: EncounterOutcome,
        /// The finished encounter, with stats, log, and survivors.
        encounter: Encounter,
    },
    /// Many fights, folded into cumulative results.
    Batch(SimulationResults),
}

impl Simulation {
    /// Create a simulation over pristine rosters. The rosters are the
    /// immutable baseline; every trial fights with a fresh copy.
    pub fn new(pcs: Vec<Pc>, npcs: Vec<Npc>, config: SimConfig) -> Self {
        Self {
            baseline_pcs: pcs,
            baseline_npcs: npcs,
            config,
        }
    }

    /// The configuration this simulation runs under.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run all configured trials and return the cumulative results.
    /// With an empty roster on either side there is nothing to fight
    /// and the results stay empty.
    pub fn run(&self) -> SimulationResults {
        let mut results = SimulationResults::default();
        if self.baseline_pcs.is_empty() || self.baseline_npcs.is_empty() {
            return results;
        }

        for trial in 0..self.config.number_of_fights {
            let (outcome, encounter) = self.run_trial(trial);
            results.record_fight(&outcome, encounter.stats());
        }
        results
    }

    /// Run a single fight (trial 0) and hand back the encounter.
    pub fn run_single(&self) -> (EncounterOutcome, Encounter) {
        self.run_trial(0)
    }

    /// Run one trial on a fresh copy of the baseline rosters.
    pub fn run_trial(&self, trial: u64) -> (EncounterOutcome, Encounter) {
        let mut roller = SeededRoller::from_seed(self.config.seed.wrapping_add(trial));
        let mut encounter = Encounter::new(self.baseline_pcs.clone(), self.baseline_npcs.clone());
        let outcome = encounter.run(self.config.max_rounds_per_fight, &mut roller);
        (outcome, encounter)
    }
}

/// Entry point for callers with already-loaded rosters: a batch run
/// for more than one fight, the single-fight report otherwise.
pub fn run_simulation(pcs: Vec<Pc>, npcs: Vec<Npc>, config: SimConfig) -> SimulationOutcome {
    let simulation = Simulation::new(pcs, npcs, config);
    if simulation.config().number_of_fights > 1 {
        SimulationOutcome::Batch(simulation.run())
    } else {
        let (outcome, encounter) = simulation.run_single();
        SimulationOutcome::Single { outcome, encounter }
    }
}
