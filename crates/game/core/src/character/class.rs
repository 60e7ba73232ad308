//! Class rules - per-character archetype data.
//!
//! Archetypes differ only in data. A new combatant archetype is a new
//! [`ClassRules`] value, never a new character type.

/// How a class turns levels into an attack-roll bonus.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackProgression {
    /// +1 for every second level (level 2 → +1, level 3 → +1, level 4 → +2).
    #[default]
    EveryOtherLevel,
    /// +1 for every level.
    EveryLevel,
}

impl AttackProgression {
    /// Attack bonus granted at `level`, saturating at `i32::MAX`.
    pub fn bonus(&self, level: u32) -> i32 {
        let bonus = match self {
            AttackProgression::EveryOtherLevel => level / 2,
            AttackProgression::EveryLevel => level,
        };
        i32::try_from(bonus).unwrap_or(i32::MAX)
    }
}

/// Rules attached to a character's class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassRules {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_progression: AttackProgression,
}

impl ClassRules {
    pub const COMMONER: &'static str = "commoner";
    pub const FIGHTER: &'static str = "fighter";

    pub fn new(name: impl Into<String>, attack_progression: AttackProgression) -> Self {
        Self {
            name: name.into(),
            attack_progression,
        }
    }

    /// Default archetype: attack bonus every second level.
    pub fn commoner() -> Self {
        Self::new(Self::COMMONER, AttackProgression::EveryOtherLevel)
    }

    /// Martial archetype: attack bonus every level.
    pub fn fighter() -> Self {
        Self::new(Self::FIGHTER, AttackProgression::EveryLevel)
    }

    pub fn attack_bonus(&self, level: u32) -> i32 {
        self.attack_progression.bonus(level)
    }
}

impl Default for ClassRules {
    fn default() -> Self {
        Self::commoner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_other_level_progression() {
        let progression = AttackProgression::EveryOtherLevel;
        assert_eq!(progression.bonus(1), 0);
        assert_eq!(progression.bonus(2), 1);
        assert_eq!(progression.bonus(3), 1);
        assert_eq!(progression.bonus(4), 2);
    }

    #[test]
    fn every_level_progression() {
        let progression = AttackProgression::EveryLevel;
        assert_eq!(progression.bonus(1), 1);
        assert_eq!(progression.bonus(5), 5);
    }

    #[test]
    fn bonus_never_wraps_negative() {
        assert_eq!(AttackProgression::EveryLevel.bonus(u32::MAX), i32::MAX);
        assert_eq!(
            AttackProgression::EveryOtherLevel.bonus(u32::MAX),
            i32::MAX
        );
    }

    #[test]
    fn presets() {
        assert_eq!(ClassRules::default(), ClassRules::commoner());
        assert_eq!(ClassRules::fighter().attack_bonus(3), 3);
        assert_eq!(ClassRules::commoner().attack_bonus(3), 1);
    }

    #[test]
    fn progression_parses_snake_case() {
        assert_eq!(
            "every_level".parse::<AttackProgression>(),
            Ok(AttackProgression::EveryLevel)
        );
        assert!("every_third_level".parse::<AttackProgression>().is_err());
    }
}
