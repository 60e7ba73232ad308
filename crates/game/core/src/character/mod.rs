//! Character - the mutable combatant entity.
//!
//! A character owns its identity, alignment, armor class, hit points, level,
//! experience and ability scores. Combat only reads it through [`CombatStats`] and
//! writes to it through [`ExperienceSink`]; damage is applied by the caller.
//!
//! # Invariants
//!
//! - `alignment` is always one of [`Alignment`]
//! - every ability score is within `[1, 20]`
//! - `1 <= level <= RulesConfig::MAX_LEVEL`
//!
//! All fallible operations validate before writing.

mod alignment;
mod class;
mod error;

pub use alignment::Alignment;
pub use class::{AttackProgression, ClassRules};
pub use error::CharacterError;

use crate::config::RulesConfig;
use crate::stats::{AbilityKind, AbilityScores};

/// Narrow write capability handed to the combat resolver.
///
/// The resolver may grant experience to the attacker and nothing else.
pub trait ExperienceSink {
    /// Add experience, leveling up at most once. Returns true if a level was gained.
    fn gain_experience(&mut self, xp: u32) -> bool;
}

/// Values combat reads off a participant, locked when the attack is initiated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatStats {
    /// Added to the attacker's roll.
    pub attack_modifier: i32,
    /// Strength modifier, added to damage.
    pub damage_modifier: i32,
    /// Target the attacker's modified roll must meet.
    pub defense: i32,
}

/// A single combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    name: String,
    alignment: Alignment,
    class: ClassRules,
    armor_class: i32,
    hit_points: i32,
    level: u32,
    experience: u32,
    abilities: AbilityScores,
}

impl Character {
    /// Create a neutral character with default stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_alignment(name, Alignment::default())
    }

    pub fn with_alignment(name: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            name: name.into(),
            alignment,
            class: ClassRules::default(),
            armor_class: RulesConfig::DEFAULT_ARMOR_CLASS,
            hit_points: RulesConfig::DEFAULT_HIT_POINTS,
            level: RulesConfig::DEFAULT_LEVEL,
            experience: 0,
            abilities: AbilityScores::new(),
        }
    }

    /// Replace the class rules (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: ClassRules) -> Self {
        self.class = class;
        self
    }

    // ===== identity =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Set the alignment from its name, rejecting anything outside the closed set.
    pub fn set_alignment_named(&mut self, name: &str) -> Result<(), CharacterError> {
        self.alignment = Alignment::from_name(name)?;
        Ok(())
    }

    pub fn class(&self) -> &ClassRules {
        &self.class
    }

    pub fn set_class(&mut self, class: ClassRules) {
        self.class = class;
    }

    // ===== abilities =====

    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    pub fn ability_score(&self, kind: AbilityKind) -> i32 {
        self.abilities.get(kind)
    }

    pub fn ability_score_named(&self, name: &str) -> Result<i32, CharacterError> {
        Ok(self.ability_score(AbilityKind::from_name(name)?))
    }

    pub fn set_ability_score(&mut self, kind: AbilityKind, score: i32) -> Result<(), CharacterError> {
        self.abilities.set(kind, score)
    }

    pub fn set_ability_score_named(&mut self, name: &str, score: i32) -> Result<(), CharacterError> {
        let kind = AbilityKind::from_name(name)?;
        self.set_ability_score(kind, score)
    }

    pub fn modifier_for(&self, kind: AbilityKind) -> i32 {
        self.abilities.modifier(kind)
    }

    // ===== defense =====

    pub fn armor_class(&self) -> i32 {
        self.armor_class
    }

    pub fn set_armor_class(&mut self, armor_class: i32) {
        self.armor_class = armor_class;
    }

    // ===== hit points =====

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Subtract `amount` from hit points.
    ///
    /// With a positive constitution modifier a blow that would leave the character
    /// below 1 instead stabilizes it at exactly that modifier. Without one, hit
    /// points may drop to zero or below, which means the character is dead.
    pub fn apply_damage(&mut self, amount: i32) {
        let attempt = self.hit_points.saturating_sub(amount);
        let con_mod = self.modifier_for(AbilityKind::Constitution);

        if con_mod > 0 && attempt < 1 {
            tracing::debug!(
                "{} stabilized at {} hp (would have dropped to {})",
                self.name,
                con_mod,
                attempt
            );
            self.hit_points = con_mod;
        } else {
            self.hit_points = attempt;
            if attempt <= 0 {
                tracing::debug!("{} has expired ({} hp)", self.name, attempt);
            }
        }
    }

    // ===== progression =====

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Set the level and replace hit points with `(5 + con_mod) * level`.
    ///
    /// This is a full heal, not an increment. Fails with
    /// [`CharacterError::InvalidLevel`] outside `[1, RulesConfig::MAX_LEVEL]`.
    pub fn set_level(&mut self, level: u32) -> Result<(), CharacterError> {
        if !RulesConfig::is_valid_level(level) {
            return Err(CharacterError::InvalidLevel { level });
        }
        self.level = level;
        self.hit_points = self.max_hit_points();
        Ok(())
    }

    /// Hit points granted by the current level and constitution.
    pub fn max_hit_points(&self) -> i32 {
        let per_level =
            RulesConfig::BASE_HIT_POINTS_PER_LEVEL + self.modifier_for(AbilityKind::Constitution);
        let level = i32::try_from(self.level).unwrap_or(i32::MAX);
        per_level.saturating_mul(level)
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience needed to leave the current level.
    pub fn experience_threshold(&self) -> u32 {
        self.level.saturating_mul(RulesConfig::XP_PER_LEVEL)
    }

    /// Add experience, leveling up when the threshold is reached.
    ///
    /// Leveling is single-step: even if `xp` would cross two thresholds, only one
    /// level is gained and only one threshold is subtracted. The remainder carries
    /// over as experience. At [`RulesConfig::MAX_LEVEL`] experience keeps
    /// accumulating (saturating) without further level-ups.
    pub fn gain_experience(&mut self, xp: u32) -> bool {
        let mut attempt = self.experience.saturating_add(xp);
        let threshold = self.experience_threshold();

        let leveled = attempt >= threshold && self.level < RulesConfig::MAX_LEVEL;
        if leveled {
            self.level += 1;
            self.hit_points = self.max_hit_points();
            attempt -= threshold;
            tracing::debug!(
                "{} reached level {} ({} xp carried over)",
                self.name,
                self.level,
                attempt
            );
        }

        self.experience = attempt;
        leveled
    }

    // ===== combat =====

    /// Strength modifier plus the class attack bonus for the current level.
    pub fn attack_modifier(&self) -> i32 {
        self.modifier_for(AbilityKind::Strength) + self.class.attack_bonus(self.level)
    }

    /// Armor class plus dexterity modifier.
    pub fn defense_modifier(&self) -> i32 {
        self.armor_class + self.modifier_for(AbilityKind::Dexterity)
    }

    pub fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack_modifier: self.attack_modifier(),
            damage_modifier: self.modifier_for(AbilityKind::Strength),
            defense: self.defense_modifier(),
        }
    }
}

impl ExperienceSink for Character {
    fn gain_experience(&mut self, xp: u32) -> bool {
        Character::gain_experience(self, xp)
    }
}
