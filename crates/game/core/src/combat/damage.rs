//! Damage calculation.

use crate::config::RulesConfig;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = (successful ? 1 : 0) + str_mod
///
/// if critical:
///     damage *= 2
/// ```
///
/// The base point is awarded only when the modified roll met the defense, so a
/// critical that fails the comparison doubles the strength bonus alone. The
/// doubling covers the running total (base point and strength bonus together).
///
/// There is no minimum: a negative strength modifier can take the total below
/// zero, and the result is returned as-is.
pub const fn calculate_damage(is_successful: bool, is_critical: bool, strength_modifier: i32) -> i32 {
    let base = if is_successful {
        RulesConfig::BASE_DAMAGE
    } else {
        0
    };

    let damage = base + strength_modifier;

    if is_critical {
        damage * RulesConfig::CRITICAL_MULTIPLIER
    } else {
        damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_hit_deals_one() {
        assert_eq!(calculate_damage(true, false, 0), 1);
    }

    #[test]
    fn miss_deals_nothing() {
        assert_eq!(calculate_damage(false, false, 0), 0);
    }

    #[test]
    fn strength_adds_damage() {
        assert_eq!(calculate_damage(true, false, 1), 2);
    }

    #[test]
    fn strength_damages_even_on_failed_comparison() {
        assert_eq!(calculate_damage(false, false, 1), 1);
    }

    #[test]
    fn critical_doubles_total() {
        assert_eq!(calculate_damage(true, true, 0), 2);
        assert_eq!(calculate_damage(true, true, 5), 12);
    }

    #[test]
    fn critical_without_comparison_doubles_strength_only() {
        assert_eq!(calculate_damage(false, true, 0), 0);
        assert_eq!(calculate_damage(false, true, 3), 6);
    }

    #[test]
    fn weak_attacker_can_deal_negative_damage() {
        assert_eq!(calculate_damage(true, false, -5), -4);
        assert_eq!(calculate_damage(false, false, -1), -1);
    }
}
