//! One combat encounter: the round loop and its terminal conditions.
//!
//! Each round, every living PC attacks a random living NPC, then every
//! NPC still standing attacks a random living PC. A combatant removed
//! mid-round (defeated NPC, dead PC) leaves the target pool
//! immediately. Combat ends when a side is wiped out or the round
//! limit is reached.

use hs_core::{Npc, Pc, ResistanceType};

use crate::attack;
use crate::dice::DieRoller;
use crate::fallout;
use crate::stats::CombatStats;

/// How a single encounter ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncounterOutcome {
    /// At least one PC survived and every NPC was defeated.
    pub pc_won: bool,
    /// At least one NPC survived and every PC died.
    pub npc_won: bool,
    /// Rounds fought.
    pub rounds: u32,
}

impl EncounterOutcome {
    /// The result of a combat that never started (an empty roster).
    pub fn no_contest() -> Self {
        Self::default()
    }

    /// Neither side won outright: mutual wipe, timeout, or no contest.
    pub fn is_draw(&self) -> bool {
        self.pc_won == self.npc_won
    }
}

/// Something that happened during an encounter, for verbose replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterEvent {
    /// Round the event happened in.
    pub round: u32,
    /// What happened.
    pub kind: EventKind,
}

/// The kinds of event an encounter can log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A PC attack landed.
    PcHit {
        /// Attacking PC.
        attacker: String,
        /// Defending NPC.
        target: String,
        /// Damage rolled (before protection).
        damage: u32,
    },
    /// A PC attack missed.
    PcMissed {
        /// Attacking PC.
        attacker: String,
        /// Defending NPC.
        target: String,
    },
    /// An NPC attack landed.
    NpcHit {
        /// Attacking NPC.
        attacker: String,
        /// Defending PC.
        target: String,
        /// Resistance type the damage landed on.
        resistance: ResistanceType,
        /// Damage dealt.
        damage: u32,
    },
    /// An NPC attack missed.
    NpcMissed {
        /// Attacking NPC.
        attacker: String,
        /// Defending PC.
        target: String,
    },
    /// A PC's stress counter saturated and cleared.
    MinorFallout {
        /// The suffering PC.
        pc: String,
    },
    /// A PC's second minor fallout escalated, clearing all counters.
    MajorFallout {
        /// The suffering PC.
        pc: String,
    },
    /// A PC died of their second major fallout.
    PcDied {
        /// The dead PC.
        pc: String,
    },
    /// An NPC's resistance reached zero.
    NpcDefeated {
        /// The defeated NPC.
        npc: String,
    },
}

impl std::fmt::Display for EncounterEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EventKind::PcHit {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} hits {target} for {damage}"),
            EventKind::PcMissed { attacker, target } => {
                write!(f, "{attacker} misses {target}")
            }
            EventKind::NpcHit {
                attacker,
                target,
                resistance,
                damage,
            } => write!(f, "{attacker} hits {target} for {damage} {resistance} stress"),
            EventKind::NpcMissed { attacker, target } => {
                write!(f, "{attacker} misses {target}")
            }
            EventKind::MinorFallout { pc } => write!(f, "{pc} suffers a minor fallout"),
            EventKind::MajorFallout { pc } => write!(f, "{pc} suffers a MAJOR fallout"),
            EventKind::PcDied { pc } => write!(f, "{pc} dies"),
            EventKind::NpcDefeated { npc } => write!(f, "{npc} is defeated"),
        }
    }
}

/// A single combat between a party of PCs and a group of NPCs.
///
/// Owns its own copies of the combatants; the caller keeps the
/// pristine rosters and builds a fresh `Encounter` per trial.
#[derive(Debug)]
pub struct Encounter {
    pcs: Vec<Pc>,
    npcs: Vec<Npc>,
    stats: CombatStats,
    log: Vec<EncounterEvent>,
}

impl Encounter {
    /// Set up an encounter from per-combat copies of the rosters.
    pub fn new(pcs: Vec<Pc>, npcs: Vec<Npc>) -> Self {
        Self {
            pcs,
            npcs,
            stats: CombatStats::default(),
            log: Vec::new(),
        }
    }

    /// Run rounds until one side is wiped out or `max_rounds` is hit.
    /// An empty roster on either side is a no-contest: no rounds are
    /// fought and neither side wins.
    pub fn run<R: DieRoller>(&mut self, max_rounds: u32, roller: &mut R) -> EncounterOutcome {
        if self.pcs.is_empty() || self.npcs.is_empty() {
            return EncounterOutcome::no_contest();
        }

        while !self.is_over() && self.stats.rounds < max_rounds {
            self.round(roller);
        }

        let pcs_alive = self.pcs.iter().any(|pc| !pc.is_dead());
        let npcs_alive = self.npcs.iter().any(|npc| !npc.is_defeated());
        EncounterOutcome {
            pc_won: pcs_alive && !npcs_alive,
            npc_won: npcs_alive && !pcs_alive,
            rounds: self.stats.rounds,
        }
    }

    /// Returns true once either side has no living members.
    pub fn is_over(&self) -> bool {
        self.pcs.iter().all(|pc| pc.is_dead()) || self.npcs.iter().all(|npc| npc.is_defeated())
    }

    /// Fight one round: all living PCs act, then all NPCs that are
    /// still standing.
    pub fn round<R: DieRoller>(&mut self, roller: &mut R) {
        self.stats.rounds += 1;
        let round = self.stats.rounds;

        let mut active_pcs: Vec<usize> = (0..self.pcs.len())
            .filter(|&i| !self.pcs[i].is_dead())
            .collect();
        let mut active_npcs: Vec<usize> = (0..self.npcs.len())
            .filter(|&i| !self.npcs[i].is_defeated())
            .collect();

        // PCs act in roster order.
        for &pc_idx in &active_pcs {
            if active_npcs.is_empty() {
                break;
            }
            let slot = roller.pick(active_npcs.len());
            let npc_idx = active_npcs[slot];

            let damage = attack::pc_attack(&self.pcs[pc_idx], &self.npcs[npc_idx], roller);
            self.stats.record_pc_attack(&self.pcs[pc_idx].name, damage);

            let kind = if damage > 0 {
                EventKind::PcHit {
                    attacker: self.pcs[pc_idx].name.clone(),
                    target: self.npcs[npc_idx].name.clone(),
                    damage,
                }
            } else {
                EventKind::PcMissed {
                    attacker: self.pcs[pc_idx].name.clone(),
                    target: self.npcs[npc_idx].name.clone(),
                }
            };
            self.log.push(EncounterEvent { round, kind });

            self.npcs[npc_idx].take_damage(damage);
            if self.npcs[npc_idx].is_defeated() {
                self.stats.npc_defeats += 1;
                active_npcs.remove(slot);
                self.log.push(EncounterEvent {
                    round,
                    kind: EventKind::NpcDefeated {
                        npc: self.npcs[npc_idx].name.clone(),
                    },
                });
            }
        }

        // Surviving NPCs strike back.
        for &npc_idx in &active_npcs {
            if active_pcs.is_empty() {
                break;
            }
            let slot = roller.pick(active_pcs.len());
            let pc_idx = active_pcs[slot];

            let dist = attack::npc_attack(&self.npcs[npc_idx], roller);
            self.stats
                .record_npc_attack(&self.npcs[npc_idx].name, dist.total());

            let kind = match dist.iter().find(|&(_, damage)| damage > 0) {
                Some((resistance, damage)) => EventKind::NpcHit {
                    attacker: self.npcs[npc_idx].name.clone(),
                    target: self.pcs[pc_idx].name.clone(),
                    resistance,
                    damage,
                },
                None => EventKind::NpcMissed {
                    attacker: self.npcs[npc_idx].name.clone(),
                    target: self.pcs[pc_idx].name.clone(),
                },
            };
            self.log.push(EncounterEvent { round, kind });

            let report = fallout::apply_damage(&mut self.pcs[pc_idx], &dist, &mut self.stats);
            let pc_name = &self.pcs[pc_idx].name;
            for _ in 0..report.minor {
                self.log.push(EncounterEvent {
                    round,
                    kind: EventKind::MinorFallout { pc: pc_name.clone() },
                });
            }
            for _ in 0..report.major {
                self.log.push(EncounterEvent {
                    round,
                    kind: EventKind::MajorFallout { pc: pc_name.clone() },
                });
            }
            if report.died {
                self.stats.pc_defeats += 1;
                active_pcs.remove(slot);
                self.log.push(EncounterEvent {
                    round,
                    kind: EventKind::PcDied { pc: pc_name.clone() },
                });
            }
        }
    }

    /// Per-combat statistics gathered so far.
    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    /// Everything that happened, in order.
    pub fn log(&self) -> &[EncounterEvent] {
        &self.log
    }

    /// The PCs, with their end-of-combat state.
    pub fn pcs(&self) -> &[Pc] {
        &self.pcs
    }

    /// The NPCs, with their end-of-combat state.
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// PCs still alive.
    pub fn surviving_pcs(&self) -> impl Iterator<Item = &Pc> {
        self.pcs.iter().filter(|pc| !pc.is_dead())
    }

    /// NPCs still standing.
    pub fn surviving_npcs(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.iter().filter(|npc| !npc.is_defeated())
    }
}
