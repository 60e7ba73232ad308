//! Combat result types and side-effect-free attack resolution.

use crate::character::CombatStats;

use super::damage::calculate_damage;
use super::hit::{check_hit, is_critical};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Modified roll met the target's defense.
    Hit,
    /// Natural 20 - always lands, damage doubled.
    Critical,
}

impl AttackOutcome {
    /// Returns true for [`Hit`](Self::Hit) and [`Critical`](Self::Critical).
    pub const fn lands(&self) -> bool {
        !matches!(self, Self::Miss)
    }
}

/// Result of a combat resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Whether the attack hit, missed, or was critical.
    pub outcome: AttackOutcome,

    /// Roll plus the attacker's attack modifier.
    pub effective_roll: i32,

    /// Damage produced by the attack.
    ///
    /// Not necessarily zero on a miss: the strength modifier is always added.
    pub damage: i32,
}

/// Resolve a complete attack (hit check + damage) without touching either side.
///
/// # Arguments
///
/// * `attacker` - Snapshot of the attacker's combat stats
/// * `defender` - Snapshot of the defender's combat stats
/// * `roll` - Externally supplied d20 roll (1-20 by convention)
pub fn resolve_attack(attacker: &CombatStats, defender: &CombatStats, roll: i32) -> AttackResult {
    let critical = is_critical(roll);
    let successful = check_hit(roll, attacker.attack_modifier, defender.defense);

    let outcome = if critical {
        AttackOutcome::Critical
    } else if successful {
        AttackOutcome::Hit
    } else {
        AttackOutcome::Miss
    };

    AttackResult {
        outcome,
        effective_roll: roll + attacker.attack_modifier,
        damage: calculate_damage(successful, critical, attacker.damage_modifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(attack_modifier: i32, damage_modifier: i32, defense: i32) -> CombatStats {
        CombatStats {
            attack_modifier,
            damage_modifier,
            defense,
        }
    }

    #[test]
    fn plain_hit() {
        let result = resolve_attack(&stats(0, 0, 10), &stats(0, 0, 10), 11);
        assert_eq!(
            result,
            AttackResult {
                outcome: AttackOutcome::Hit,
                effective_roll: 11,
                damage: 1,
            }
        );
        assert!(result.outcome.lands());
    }

    #[test]
    fn plain_miss() {
        let result = resolve_attack(&stats(0, 0, 10), &stats(0, 0, 10), 9);
        assert_eq!(result.outcome, AttackOutcome::Miss);
        assert_eq!(result.damage, 0);
        assert!(!result.outcome.lands());
    }

    #[test]
    fn critical_against_heavy_armor() {
        let result = resolve_attack(&stats(0, 0, 10), &stats(0, 0, 30), 20);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, 0);
    }

    #[test]
    fn critical_with_strong_attacker() {
        let result = resolve_attack(&stats(5, 5, 10), &stats(0, 0, 10), 20);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.effective_roll, 25);
        assert_eq!(result.damage, 12);
    }
}
