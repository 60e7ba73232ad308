//! Ability scores - the raw attributes of a character.
//!
//! Abilities (STR, DEX, CON, WIS, INT, CHA) are the only stored stats. Every combat
//! value is derived from them through [`modifier_of`](super::modifier_of).

use crate::character::CharacterError;
use crate::config::RulesConfig;

/// The six abilities that define a character.
///
/// - **STR** (Strength): attack rolls and melee damage
/// - **DEX** (Dexterity): added to armor class when defending
/// - **CON** (Constitution): hit points per level, stabilize floor
/// - **WIS**, **INT**, **CHA**: tracked but not consumed by combat
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum AbilityKind {
    Strength,
    Dexterity,
    Constitution,
    Wisdom,
    Intelligence,
    Charisma,
}

impl AbilityKind {
    pub const COUNT: usize = 6;

    pub const ALL: [AbilityKind; Self::COUNT] = [
        AbilityKind::Strength,
        AbilityKind::Dexterity,
        AbilityKind::Constitution,
        AbilityKind::Wisdom,
        AbilityKind::Intelligence,
        AbilityKind::Charisma,
    ];

    /// Parse an ability from its name (`"strength"`, `"Dexterity"`, ...).
    ///
    /// This is the only place an unrecognized ability can appear; once parsed the
    /// kind is a closed enum and every lookup is infallible.
    pub fn from_name(name: &str) -> Result<Self, CharacterError> {
        name.parse().map_err(|_| CharacterError::InvalidAbilityKind {
            value: name.to_owned(),
        })
    }

    pub const fn abbrev(&self) -> &'static str {
        match self {
            AbilityKind::Strength => "STR",
            AbilityKind::Dexterity => "DEX",
            AbilityKind::Constitution => "CON",
            AbilityKind::Wisdom => "WIS",
            AbilityKind::Intelligence => "INT",
            AbilityKind::Charisma => "CHA",
        }
    }

    pub const fn index(&self) -> usize {
        match self {
            AbilityKind::Strength => 0,
            AbilityKind::Dexterity => 1,
            AbilityKind::Constitution => 2,
            AbilityKind::Wisdom => 3,
            AbilityKind::Intelligence => 4,
            AbilityKind::Charisma => 5,
        }
    }
}

/// Fixed-size table of ability scores indexed by [`AbilityKind`].
///
/// Every score stays within `[1, 20]`: writes are validated before they land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityScores {
    values: [i32; AbilityKind::COUNT],
}

impl Default for AbilityScores {
    /// Default scores: all 10 (average human)
    fn default() -> Self {
        Self::new()
    }
}

impl AbilityScores {
    pub const fn new() -> Self {
        Self {
            values: [RulesConfig::DEFAULT_ABILITY_SCORE; AbilityKind::COUNT],
        }
    }

    pub const fn get(&self, kind: AbilityKind) -> i32 {
        self.values[kind.index()]
    }

    /// Replace the score for `kind`.
    ///
    /// Fails with [`CharacterError::InvalidAbilityScore`] outside `[1, 20]`, leaving
    /// the table unchanged.
    pub fn set(&mut self, kind: AbilityKind, score: i32) -> Result<(), CharacterError> {
        if !RulesConfig::is_valid_ability_score(score) {
            return Err(CharacterError::InvalidAbilityScore { kind, score });
        }
        self.values[kind.index()] = score;
        Ok(())
    }

    /// Modifier derived from the current score of `kind`.
    pub const fn modifier(&self, kind: AbilityKind) -> i32 {
        super::modifier_of(self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scores_default_to_ten() {
        let scores = AbilityScores::new();
        for kind in AbilityKind::ALL {
            assert_eq!(scores.get(kind), 10);
        }
    }

    #[test]
    fn set_replaces_single_score() {
        let mut scores = AbilityScores::new();
        scores.set(AbilityKind::Strength, 16).unwrap();
        assert_eq!(scores.get(AbilityKind::Strength), 16);
        assert_eq!(scores.get(AbilityKind::Dexterity), 10);
    }

    #[test]
    fn set_accepts_bounds() {
        let mut scores = AbilityScores::new();
        assert!(scores.set(AbilityKind::Wisdom, 1).is_ok());
        assert!(scores.set(AbilityKind::Wisdom, 20).is_ok());
        assert_eq!(scores.get(AbilityKind::Wisdom), 20);
    }

    #[test]
    fn set_rejects_out_of_range_without_writing() {
        let mut scores = AbilityScores::new();
        scores.set(AbilityKind::Charisma, 14).unwrap();

        assert_eq!(
            scores.set(AbilityKind::Charisma, 0),
            Err(CharacterError::InvalidAbilityScore {
                kind: AbilityKind::Charisma,
                score: 0,
            })
        );
        assert!(scores.set(AbilityKind::Charisma, 21).is_err());
        assert_eq!(scores.get(AbilityKind::Charisma), 14);
    }

    #[test]
    fn modifier_follows_score() {
        let mut scores = AbilityScores::new();
        scores.set(AbilityKind::Constitution, 12).unwrap();
        assert_eq!(scores.modifier(AbilityKind::Constitution), 1);
        scores.set(AbilityKind::Constitution, 9).unwrap();
        assert_eq!(scores.modifier(AbilityKind::Constitution), -1);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            AbilityKind::from_name("strength"),
            Ok(AbilityKind::Strength)
        );
        assert_eq!(AbilityKind::from_name("Charisma"), Ok(AbilityKind::Charisma));
        assert_eq!(
            AbilityKind::from_name("luck"),
            Err(CharacterError::InvalidAbilityKind {
                value: "luck".to_owned(),
            })
        );
    }

    #[test]
    fn abbreviations_and_names() {
        assert_eq!(AbilityKind::Strength.abbrev(), "STR");
        assert_eq!(AbilityKind::Dexterity.abbrev(), "DEX");
        assert_eq!(AbilityKind::Constitution.abbrev(), "CON");
        assert_eq!(AbilityKind::Wisdom.abbrev(), "WIS");
        assert_eq!(AbilityKind::Intelligence.abbrev(), "INT");
        assert_eq!(AbilityKind::Charisma.abbrev(), "CHA");
        assert_eq!(AbilityKind::Intelligence.to_string(), "intelligence");
    }

    #[test]
    fn index_matches_all_order() {
        for (position, kind) in AbilityKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }
}
