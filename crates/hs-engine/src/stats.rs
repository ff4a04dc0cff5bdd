//! Per-combat and cross-combat statistics.
//!
//! A [`CombatStats`] is created fresh for every encounter and folded
//! into a [`SimulationResults`] when the encounter ends. Per-character
//! maps are keyed by name in a `BTreeMap` so reports come out in a
//! stable order.

use std::collections::BTreeMap;

use serde::Serialize;

use hs_core::ResistanceType;

use crate::encounter::EncounterOutcome;

/// Attack totals for a single character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttackTally {
    /// Attacks attempted.
    pub attacks: u64,
    /// Attacks that dealt any damage.
    pub hits: u64,
    /// Total damage rolled (before the defender's protection).
    pub damage: u64,
}

impl AttackTally {
    /// Record one attack that dealt `damage` (0 counts as a miss).
    pub fn record(&mut self, damage: u32) {
        self.attacks += 1;
        if damage > 0 {
            self.hits += 1;
        }
        self.damage += u64::from(damage);
    }

    /// Fold another tally into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.attacks += other.attacks;
        self.hits += other.hits;
        self.damage += other.damage;
    }

    /// Hit rate in percent, or 0 with no attacks.
    pub fn hit_rate(&self) -> f64 {
        if self.attacks == 0 {
            0.0
        } else {
            self.hits as f64 / self.attacks as f64 * 100.0
        }
    }

    /// Mean damage per attack, or 0 with no attacks.
    pub fn average_damage(&self) -> f64 {
        if self.attacks == 0 {
            0.0
        } else {
            self.damage as f64 / self.attacks as f64
        }
    }
}

/// Damage a PC has received, broken down by resistance type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DamageTaken {
    by_type: [u64; 5],
    /// Total across all five types.
    pub total: u64,
}

impl DamageTaken {
    /// Record `amount` damage against `kind`.
    pub fn record(&mut self, kind: ResistanceType, amount: u32) {
        self.by_type[kind.index()] += u64::from(amount);
        self.total += u64::from(amount);
    }

    /// Damage received against `kind`.
    pub fn get(&self, kind: ResistanceType) -> u64 {
        self.by_type[kind.index()]
    }

    /// Fold another breakdown into this one.
    pub fn absorb(&mut self, other: &Self) {
        for (slot, value) in self.by_type.iter_mut().zip(other.by_type) {
            *slot += value;
        }
        self.total += other.total;
    }
}

/// Fallout totals for a single PC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FalloutTally {
    /// Minor fallouts suffered.
    pub minor: u64,
    /// Major fallouts suffered.
    pub major: u64,
    /// Deaths (two major fallouts).
    pub deaths: u64,
}

impl FalloutTally {
    /// Fold another tally into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.minor += other.minor;
        self.major += other.major;
        self.deaths += other.deaths;
    }
}

/// Statistics for a single combat encounter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombatStats {
    /// Rounds fought so far.
    pub rounds: u32,
    /// PCs that died this combat.
    pub pc_defeats: u32,
    /// NPCs defeated this combat.
    pub npc_defeats: u32,
    /// Total damage rolled against PCs.
    pub total_damage_to_pcs: u64,
    /// Total damage rolled against NPCs.
    pub total_damage_to_npcs: u64,
    /// Per-PC attack totals.
    pub pc_attacks: BTreeMap<String, AttackTally>,
    /// Per-NPC attack totals.
    pub npc_attacks: BTreeMap<String, AttackTally>,
    /// Per-PC damage received, by resistance type.
    pub pc_damage_taken: BTreeMap<String, DamageTaken>,
    /// Per-PC fallout totals.
    pub pc_fallouts: BTreeMap<String, FalloutTally>,
}

impl CombatStats {
    /// Record one PC attack that dealt `damage`.
    pub fn record_pc_attack(&mut self, name: &str, damage: u32) {
        self.pc_attacks.entry(name.to_string()).or_default().record(damage);
        self.total_damage_to_npcs += u64::from(damage);
    }

    /// Record one NPC attack whose distribution summed to `damage`.
    pub fn record_npc_attack(&mut self, name: &str, damage: u32) {
        self.npc_attacks.entry(name.to_string()).or_default().record(damage);
        self.total_damage_to_pcs += u64::from(damage);
    }

    /// Record damage a PC received against one resistance type.
    pub fn record_damage_taken(&mut self, name: &str, kind: ResistanceType, amount: u32) {
        self.pc_damage_taken
            .entry(name.to_string())
            .or_default()
            .record(kind, amount);
    }

    /// Record a minor fallout for a PC.
    pub fn record_minor_fallout(&mut self, name: &str) {
        self.pc_fallouts.entry(name.to_string()).or_default().minor += 1;
    }

    /// Record a major fallout for a PC.
    pub fn record_major_fallout(&mut self, name: &str) {
        self.pc_fallouts.entry(name.to_string()).or_default().major += 1;
    }

    /// Record a PC death.
    pub fn record_death(&mut self, name: &str) {
        self.pc_fallouts.entry(name.to_string()).or_default().deaths += 1;
    }
}

/// Aggregated results across an entire simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationResults {
    /// Fights recorded so far.
    pub total_fights: u64,
    /// Fights every NPC was defeated and at least one PC survived.
    pub pc_victories: u64,
    /// Fights every PC died and at least one NPC survived.
    pub npc_victories: u64,
    /// Everything else: mutual wipes and round-limit timeouts.
    pub draws: u64,
    /// Rounds summed across all fights.
    pub total_rounds: u64,
    /// Mean rounds per fight.
    pub average_rounds: f64,
    /// Per-PC attack totals across all fights.
    pub pc_stats: BTreeMap<String, AttackTally>,
    /// Per-NPC attack totals across all fights.
    pub npc_stats: BTreeMap<String, AttackTally>,
    /// Per-PC damage received across all fights.
    pub pc_damage_taken: BTreeMap<String, DamageTaken>,
    /// Per-PC fallout totals across all fights.
    pub pc_fallouts: BTreeMap<String, FalloutTally>,
}

impl SimulationResults {
    /// Fold one finished combat into the running totals. Classifies
    /// the fight as exactly one of victory / defeat / draw and keeps
    /// `average_rounds` consistent with the new totals.
    pub fn record_fight(&mut self, outcome: &EncounterOutcome, stats: &CombatStats) {
        self.total_fights += 1;
        self.total_rounds += u64::from(outcome.rounds);

        if outcome.pc_won && !outcome.npc_won {
            self.pc_victories += 1;
        } else if outcome.npc_won && !outcome.pc_won {
            self.npc_victories += 1;
        } else {
            self.draws += 1;
        }

        self.average_rounds = self.total_rounds as f64 / self.total_fights as f64;

        for (name, tally) in &stats.pc_attacks {
            self.pc_stats.entry(name.clone()).or_default().absorb(tally);
        }
        for (name, tally) in &stats.npc_attacks {
            self.npc_stats.entry(name.clone()).or_default().absorb(tally);
        }
        for (name, taken) in &stats.pc_damage_taken {
            self.pc_damage_taken
                .entry(name.clone())
                .or_default()
                .absorb(taken);
        }
        for (name, tally) in &stats.pc_fallouts {
            self.pc_fallouts.entry(name.clone()).or_default().absorb(tally);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn won(pc: bool, npc: bool, rounds: u32) -> EncounterOutcome {
        EncounterOutcome {
            pc_won: pc,
            npc_won: npc,
            rounds,
        }
    }

    #[test]
    fn tally_counts_hits_and_misses() {
        let mut tally = AttackTally::default();
        tally.record(5);
        tally.record(0);
        tally.record(3);
        assert_eq!(tally.attacks, 3);
        assert_eq!(tally.hits, 2);
        assert_eq!(tally.damage, 8);
        assert!((tally.hit_rate() - 200.0 / 3.0).abs() < 1e-9);
        assert!((tally.average_damage() - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_tally_rates_are_zero() {
        let tally = AttackTally::default();
        assert_eq!(tally.hit_rate(), 0.0);
        assert_eq!(tally.average_damage(), 0.0);
    }

    #[test]
    fn damage_taken_by_type() {
        let mut taken = DamageTaken::default();
        taken.record(ResistanceType::Blood, 4);
        taken.record(ResistanceType::Blood, 2);
        taken.record(ResistanceType::Mind, 3);
        assert_eq!(taken.get(ResistanceType::Blood), 6);
        assert_eq!(taken.get(ResistanceType::Mind), 3);
        assert_eq!(taken.get(ResistanceType::Echo), 0);
        assert_eq!(taken.total, 9);
    }

    #[test]
    fn record_fight_classifies_exactly_one_way() {
        let stats = CombatStats::default();
        let mut results = SimulationResults::default();
        results.record_fight(&won(true, false, 4), &stats);
        results.record_fight(&won(false, true, 6), &stats);
        results.record_fight(&won(false, false, 20), &stats);

        assert_eq!(results.total_fights, 3);
        assert_eq!(results.pc_victories, 1);
        assert_eq!(results.npc_victories, 1);
        assert_eq!(results.draws, 1);
        assert_eq!(results.total_rounds, 30);
        assert!((results.average_rounds - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn record_fight_sums_per_character_maps() {
        let mut stats = CombatStats::default();
        stats.record_pc_attack("Ash", 5);
        stats.record_pc_attack("Ash", 0);
        stats.record_npc_attack("Husk", 3);
        stats.record_damage_taken("Ash", ResistanceType::Echo, 3);
        stats.record_minor_fallout("Ash");

        let mut results = SimulationResults::default();
        results.record_fight(&won(true, false, 2), &stats);
        results.record_fight(&won(true, false, 2), &stats);

        let ash = &results.pc_stats["Ash"];
        assert_eq!(ash.attacks, 4);
        assert_eq!(ash.hits, 2);
        assert_eq!(ash.damage, 10);
        assert_eq!(results.npc_stats["Husk"].damage, 6);
        assert_eq!(results.pc_damage_taken["Ash"].get(ResistanceType::Echo), 6);
        assert_eq!(results.pc_fallouts["Ash"].minor, 2);
    }

    proptest! {
        #[test]
        fn victories_and_draws_always_sum_to_total(
            fights in proptest::collection::vec((any::<bool>(), any::<bool>(), 0u32..30), 0..100)
        ) {
            let stats = CombatStats::default();
            let mut results = SimulationResults::default();
            for (pc, npc, rounds) in fights {
                // A fight never ends with both sides winning outright.
                let (pc, npc) = if pc && npc { (pc, false) } else { (pc, npc) };
                results.record_fight(&won(pc, npc, rounds), &stats);
                prop_assert_eq!(
                    results.pc_victories + results.npc_victories + results.draws,
                    results.total_fights
                );
                if results.total_fights > 0 {
                    let expected = results.total_rounds as f64 / results.total_fights as f64;
                    prop_assert!((results.average_rounds - expected).abs() < f64::EPSILON);
                }
            }
        }
    }
}
