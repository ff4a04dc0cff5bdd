//! Damage application and the fallout state machine.
//!
//! Stress lands on a single resistance counter. Saturating a counter
//! at [`STRESS_CAP`] clears it and causes a minor fallout; every
//! second minor fallout escalates to a major fallout, which clears all
//! five counters; a second major fallout kills the character.

use hs_core::{DamageDistribution, Pc, STRESS_CAP};

use crate::stats::CombatStats;

/// What a single damage application did to the character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FalloutReport {
    /// Minor fallouts triggered.
    pub minor: u32,
    /// Major fallouts triggered.
    pub major: u32,
    /// Whether this application killed the character.
    pub died: bool,
}

/// Apply an incoming damage distribution to a PC, resolving fallouts
/// and recording everything into `stats`.
///
/// Damage is recorded at its rolled value even when the counter clamps
/// at the cap. The distribution only ever carries one nonzero type, so
/// at most one fallout chain fires per call.
pub fn apply_damage(
    pc: &mut Pc,
    dist: &DamageDistribution,
    stats: &mut CombatStats,
) -> FalloutReport {
    let mut report = FalloutReport::default();

    for (kind, damage) in dist.iter() {
        if damage == 0 {
            continue;
        }

        let new_value = pc.resistance.add(kind, damage);
        stats.record_damage_taken(&pc.name, kind, damage);

        if new_value >= STRESS_CAP {
            pc.resistance.set(kind, 0);
            pc.minor_fallouts += 1;
            report.minor += 1;
            stats.record_minor_fallout(&pc.name);

            // Every second minor fallout escalates.
            if pc.minor_fallouts % 2 == 0 {
                pc.major_fallouts += 1;
                report.major += 1;
                stats.record_major_fallout(&pc.name);

                // A major fallout wipes every counter, not just the
                // one that saturated.
                pc.resistance.clear_all();

                if pc.is_dead() {
                    report.died = true;
                    stats.record_death(&pc.name);
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::{ResistanceTrack, ResistanceType};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn fresh_pc() -> Pc {
        Pc {
            name: "Ash".to_string(),
            class: "Cleaver".to_string(),
            calling: "Hunger".to_string(),
            abilities: BTreeSet::new(),
            domains: BTreeSet::new(),
            weapon: 6,
            resistance: ResistanceTrack::default(),
            minor_fallouts: 0,
            major_fallouts: 0,
        }
    }

    fn hit(kind: ResistanceType, amount: u32) -> DamageDistribution {
        DamageDistribution::focused(kind, amount)
    }

    #[test]
    fn damage_accumulates_below_cap() {
        let mut pc = fresh_pc();
        let mut stats = CombatStats::default();
        let report = apply_damage(&mut pc, &hit(ResistanceType::Blood, 5), &mut stats);

        assert_eq!(pc.resistance.blood, 5);
        assert_eq!(report, FalloutReport::default());
        assert_eq!(stats.pc_damage_taken["Ash"].get(ResistanceType::Blood), 5);
        assert_eq!(stats.pc_damage_taken["Ash"].total, 5);
    }

    #[test]
    fn miss_changes_nothing() {
        let mut pc = fresh_pc();
        let mut stats = CombatStats::default();
        apply_damage(&mut pc, &DamageDistribution::none(), &mut stats);

        assert_eq!(pc.resistance, ResistanceTrack::default());
        assert!(stats.pc_damage_taken.is_empty());
    }

    #[test]
    fn saturation_triggers_minor_fallout_and_clears_counter() {
        let mut pc = fresh_pc();
        pc.resistance.set(ResistanceType::Mind, 10);
        let mut stats = CombatStats::default();
        let report = apply_damage(&mut pc, &hit(ResistanceType::Mind, 4), &mut stats);

        assert_eq!(pc.resistance.mind, 0);
        assert_eq!(pc.minor_fallouts, 1);
        assert_eq!(pc.major_fallouts, 0);
        assert_eq!(report.minor, 1);
        assert_eq!(report.major, 0);
        // The rolled damage is recorded, not the clamped delta.
        assert_eq!(stats.pc_damage_taken["Ash"].get(ResistanceType::Mind), 4);
        assert_eq!(stats.pc_fallouts["Ash"].minor, 1);
    }

    #[test]
    fn second_minor_fallout_escalates_and_clears_all_counters() {
        let mut pc = fresh_pc();
        pc.minor_fallouts = 1;
        pc.resistance.set(ResistanceType::Blood, 11);
        pc.resistance.set(ResistanceType::Echo, 7);
        pc.resistance.set(ResistanceType::Supplies, 3);
        let mut stats = CombatStats::default();
        let report = apply_damage(&mut pc, &hit(ResistanceType::Blood, 2), &mut stats);

        assert_eq!(pc.minor_fallouts, 2);
        assert_eq!(pc.major_fallouts, 1);
        assert_eq!(report.major, 1);
        assert!(!report.died);
        // Major fallout wipes everything, including untouched counters.
        assert_eq!(pc.resistance, ResistanceTrack::default());
        assert_eq!(stats.pc_fallouts["Ash"].major, 1);
        assert_eq!(stats.pc_fallouts["Ash"].deaths, 0);
    }

    #[test]
    fn double_saturation_sequence_gives_one_major() {
        let mut pc = fresh_pc();
        let mut stats = CombatStats::default();

        apply_damage(&mut pc, &hit(ResistanceType::Blood, 12), &mut stats);
        assert_eq!(pc.minor_fallouts, 1);
        assert_eq!(pc.major_fallouts, 0);

        pc.resistance.set(ResistanceType::Fortune, 4);
        apply_damage(&mut pc, &hit(ResistanceType::Blood, 12), &mut stats);
        assert_eq!(pc.minor_fallouts, 2);
        assert_eq!(pc.major_fallouts, 1);
        assert_eq!(pc.resistance.fortune, 0);
        assert_eq!(stats.pc_fallouts["Ash"].minor, 2);
        assert_eq!(stats.pc_fallouts["Ash"].major, 1);
    }

    #[test]
    fn second_major_fallout_kills() {
        let mut pc = fresh_pc();
        pc.minor_fallouts = 3;
        pc.major_fallouts = 1;
        let mut stats = CombatStats::default();
        let report = apply_damage(&mut pc, &hit(ResistanceType::Echo, 12), &mut stats);

        assert_eq!(pc.minor_fallouts, 4);
        assert_eq!(pc.major_fallouts, 2);
        assert!(report.died);
        assert!(pc.is_dead());
        assert_eq!(stats.pc_fallouts["Ash"].deaths, 1);
    }

    proptest! {
        #[test]
        fn invariants_hold_under_any_damage_sequence(
            hits in proptest::collection::vec((0usize..5, 1u32..15), 1..80)
        ) {
            let mut pc = fresh_pc();
            let mut stats = CombatStats::default();
            for (idx, amount) in hits {
                apply_damage(
                    &mut pc,
                    &hit(ResistanceType::ALL[idx], amount),
                    &mut stats,
                );
                for kind in ResistanceType::ALL {
                    prop_assert!(pc.resistance.get(kind) <= STRESS_CAP);
                }
                // Majors track even multiples of minors in lockstep.
                prop_assert_eq!(pc.major_fallouts, pc.minor_fallouts / 2);
                prop_assert_eq!(pc.is_dead(), pc.major_fallouts >= 2);
            }
        }
    }
}
