//! Modifiers - derived from ability scores, never stored.
//!
//! These are the bonuses added to d20 rolls and damage.
//!
//! Formula: modifier = floor((score - 10) / 2)

/// Calculate the modifier for an ability score (d20 formula).
///
/// Uses floor division so odd scores below 10 round toward negative infinity.
///
/// Examples:
/// - 1 → -5
/// - 8-9 → -1
/// - 10-11 → +0
/// - 12-13 → +1
/// - 20 → +5
///
/// Only meaningful for `[1, 20]`; callers pass validated scores.
pub const fn modifier_of(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_values() {
        assert_eq!(modifier_of(1), -5);
        assert_eq!(modifier_of(9), -1);
        assert_eq!(modifier_of(10), 0);
        assert_eq!(modifier_of(11), 0);
        assert_eq!(modifier_of(12), 1);
        assert_eq!(modifier_of(14), 2);
        assert_eq!(modifier_of(20), 5);
    }

    #[test]
    fn odd_scores_below_ten_round_down() {
        assert_eq!(modifier_of(3), -4);
        assert_eq!(modifier_of(7), -2);
    }

    #[test]
    fn matches_floor_over_valid_range() {
        for score in 1..=20 {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(modifier_of(score), expected, "score {score}");
        }
    }
}
