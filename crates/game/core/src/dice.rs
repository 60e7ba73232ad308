//! Die-roll collaborator.
//!
//! The rules engine never rolls dice: every roll is passed into
//! [`CombatResolution`](crate::CombatResolution) by the caller. This module provides a
//! deterministic roll source for callers (drivers, simulations, tests) that need one.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed, they must
//! produce the same roll. This keeps every combat round reproducible.

use crate::config::RulesConfig;

/// Source of die rolls.
pub trait RollOracle {
    /// Generate a raw u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive). A zero-sided die rolls 0.
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32(seed) % sides) + 1
    }

    /// Roll a d20 (1-20 inclusive), ready to pass to combat resolution.
    fn roll_d20(&self, seed: u64) -> i32 {
        self.roll_die(seed, RulesConfig::DIE_SIDES) as i32
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: every roll is derived from the seed passed in, so the same seed
/// always yields the same roll.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RollOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derive the seed for one roll.
///
/// * `game_seed` - Base seed fixed when the encounter starts
/// * `round` - Combat round number
/// * `actor` - Index of the rolling combatant
/// * `context` - Distinguishes several rolls by the same actor in one round
pub fn compute_seed(game_seed: u64, round: u64, actor: u32, context: u32) -> u64 {
    let mut hash = game_seed;

    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_roll() {
        let rng = PcgRng;
        for seed in 0..64 {
            assert_eq!(rng.roll_d20(seed), rng.roll_d20(seed));
        }
    }

    #[test]
    fn d20_stays_in_range() {
        let rng = PcgRng;
        for seed in 0..2000 {
            let roll = rng.roll_d20(compute_seed(42, seed, 0, 0));
            assert!((1..=20).contains(&roll), "roll {roll} out of range");
        }
    }

    #[test]
    fn d20_reaches_both_ends() {
        let rng = PcgRng;
        let rolls: Vec<i32> = (0..2000)
            .map(|round| rng.roll_d20(compute_seed(7, round, 1, 0)))
            .collect();
        assert!(rolls.contains(&1));
        assert!(rolls.contains(&20));
    }

    #[test]
    fn zero_sided_die() {
        assert_eq!(PcgRng.roll_die(3, 0), 0);
    }

    #[test]
    fn seed_depends_on_every_input() {
        let base = compute_seed(1, 2, 3, 4);
        assert_ne!(base, compute_seed(9, 2, 3, 4));
        assert_ne!(base, compute_seed(1, 9, 3, 4));
        assert_ne!(base, compute_seed(1, 2, 9, 4));
        assert_ne!(base, compute_seed(1, 2, 3, 9));
    }
}
