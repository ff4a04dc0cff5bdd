//! Attack resolution: one attack in, one outcome out.
//!
//! PC attacks roll a pool of d10s and keep the highest (Heart-style
//! skill checks); NPC attacks roll a single d10 that hits low. Both
//! are pure given a [`DieRoller`].

use hs_core::{Ability, DamageDistribution, Npc, Pc, ResistanceType};

use crate::dice::{D10, DieRoller};

/// Lowest d10 value on which a PC attack hits.
pub const PC_HIT_MIN: u32 = 6;

/// A PC attack roll of exactly this is a critical: +2 damage.
pub const PC_CRIT: u32 = 10;

/// Highest d10 value on which an NPC attack hits.
pub const NPC_HIT_MAX: u32 = 5;

/// An NPC attack roll of exactly this is a critical: doubled damage.
pub const NPC_CRIT: u32 = 1;

/// Resolve a PC attack against an NPC. Returns the damage dealt, with
/// 0 meaning a miss.
///
/// The pool is one base d10, plus one for the `Kill` ability, plus one
/// for any domain shared with the defender. Only the highest die
/// matters: at [`PC_HIT_MIN`] or above the attack hits for one weapon
/// die of damage, and a natural [`PC_CRIT`] adds +2.
pub fn pc_attack<R: DieRoller>(pc: &Pc, npc: &Npc, roller: &mut R) -> u32 {
    let mut highest = roller.roll(D10);
    if pc.has_ability(Ability::Kill) {
        highest = highest.max(roller.roll(D10));
    }
    if pc.shares_domain(&npc.domains) {
        highest = highest.max(roller.roll(D10));
    }

    if highest < PC_HIT_MIN {
        return 0;
    }

    let mut damage = weapon_damage(pc.weapon, roller);
    if highest == PC_CRIT {
        damage += 2;
    }
    damage
}

/// Resolve an NPC attack. Returns the damage distribution across the
/// five resistance types; all slots are zero on a miss.
///
/// A single d10 hits on [`NPC_HIT_MAX`] or below. A natural
/// [`NPC_CRIT`] doubles the weapon damage. The whole amount lands on
/// one resistance type chosen uniformly; damage is never split.
pub fn npc_attack<R: DieRoller>(npc: &Npc, roller: &mut R) -> DamageDistribution {
    let roll = roller.roll(D10);
    if roll > NPC_HIT_MAX {
        return DamageDistribution::none();
    }

    let mut damage = weapon_damage(npc.weapon, roller);
    if roll == NPC_CRIT {
        damage *= 2;
    }

    let target = ResistanceType::ALL[roller.pick(ResistanceType::ALL.len())];
    DamageDistribution::focused(target, damage)
}

/// One weapon die of damage. A weapon rating of zero still deals the
/// minimum 1 on a successful hit.
fn weapon_damage<R: DieRoller>(weapon: u32, roller: &mut R) -> u32 {
    if weapon == 0 {
        1
    } else {
        roller.roll(weapon)
    }
}
