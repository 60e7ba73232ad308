//! Hit checks.

use crate::config::RulesConfig;

/// A natural [`RulesConfig::CRITICAL_HIT`] always hits, regardless of defense.
pub const fn is_critical(roll: i32) -> bool {
    roll == RulesConfig::CRITICAL_HIT
}

/// The die roll plus the attacker's attack modifier.
pub const fn effective_attack_roll(roll: i32, attack_modifier: i32) -> i32 {
    roll + attack_modifier
}

/// Check whether the modified roll meets the defender's defense.
///
/// # Formula
///
/// ```text
/// roll + attack_modifier >= armor_class + dex_mod
/// ```
///
/// Ties go to the attacker. A critical is not considered here; see [`is_critical`].
pub const fn check_hit(roll: i32, attack_modifier: i32, defense: i32) -> bool {
    effective_attack_roll(roll, attack_modifier) >= defense
}
