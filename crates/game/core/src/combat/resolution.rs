//! One-shot combat resolution with the experience side effect.

use crate::character::{Character, ExperienceSink};
use crate::config::RulesConfig;

use super::result::{AttackOutcome, AttackResult, resolve_attack};

/// A single attack attempt between two characters.
///
/// Both participants are read once, when the resolution is created. Afterwards the
/// resolution holds the attacker only as an [`ExperienceSink`], and the defender not
/// at all, so resolving can never mutate the defender.
///
/// # Examples
///
/// ```
/// use combat_core::{Character, CombatResolution};
///
/// let mut attacker = Character::new("Attacker");
/// let mut defender = Character::new("Defender");
///
/// let combat = CombatResolution::new(&mut attacker, &defender, 11);
/// assert!(combat.hits());
/// let damage = combat.resolve();
/// defender.apply_damage(damage);
///
/// assert_eq!(defender.hit_points(), 4);
/// assert_eq!(attacker.experience(), 10);
/// ```
pub struct CombatResolution<'a> {
    attacker: &'a mut dyn ExperienceSink,
    roll: i32,
    result: AttackResult,
}

impl<'a> CombatResolution<'a> {
    /// Evaluate an attack of `attacker` against `defender` with an external `roll`.
    pub fn new(attacker: &'a mut Character, defender: &Character, roll: i32) -> Self {
        let result = resolve_attack(&attacker.combat_stats(), &defender.combat_stats(), roll);

        tracing::trace!(
            "{} attacks {}: roll {} -> {} vs defense {}",
            attacker.name(),
            defender.name(),
            roll,
            result.effective_roll,
            defender.defense_modifier()
        );

        Self {
            attacker,
            roll,
            result,
        }
    }

    pub fn roll(&self) -> i32 {
        self.roll
    }

    pub fn is_critical_hit(&self) -> bool {
        self.result.outcome == AttackOutcome::Critical
    }

    /// Roll plus the attacker's attack modifier.
    pub fn effective_attack_roll(&self) -> i32 {
        self.result.effective_roll
    }

    /// Whether the attack lands (critical or modified roll meets defense).
    ///
    /// Side-effect free: use this for hit/miss checks that must not grant experience.
    pub fn hits(&self) -> bool {
        self.result.outcome.lands()
    }

    /// Damage the attack would deal, without granting experience.
    pub fn damage(&self) -> i32 {
        self.result.damage
    }

    pub fn result(&self) -> AttackResult {
        self.result
    }

    /// Finish the attack and return its damage.
    ///
    /// On a landed attack the attacker gains [`RulesConfig::XP_PER_HIT`] experience
    /// first, which may level them up. The defender is untouched; apply the returned
    /// damage with [`Character::apply_damage`].
    pub fn resolve(self) -> i32 {
        if self.hits() {
            let leveled = self.attacker.gain_experience(RulesConfig::XP_PER_HIT);
            tracing::debug!(
                "attack landed ({:?}) for {} damage, attacker leveled: {}",
                self.result.outcome,
                self.result.damage,
                leveled
            );
        }
        self.result.damage
    }
}
