//! Character validation errors.

use crate::config::RulesConfig;
use crate::error::{ErrorSeverity, RuleError};
use crate::stats::AbilityKind;

/// Errors raised when a character mutation or lookup receives invalid input.
///
/// Every variant is raised before any field is written, so a failed call leaves
/// the character exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// Alignment name outside {good, neutral, evil}.
    #[error("Invalid alignment <{value}>")]
    InvalidAlignment {
        /// The rejected text.
        value: String,
    },

    /// Ability score outside `[1, 20]`.
    #[error("Invalid ability score {score} for {kind} (expected 1..=20)")]
    InvalidAbilityScore {
        /// Ability being written.
        kind: AbilityKind,
        /// The rejected score.
        score: i32,
    },

    /// Ability name that is not one of the six abilities.
    #[error("Invalid ability <{value}>")]
    InvalidAbilityKind {
        /// The rejected text.
        value: String,
    },

    /// Level outside `[1, MAX_LEVEL]`.
    #[error("Invalid level {level} (expected 1..={max})", max = RulesConfig::MAX_LEVEL)]
    InvalidLevel {
        /// The rejected level.
        level: u32,
    },
}

impl RuleError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        // Every character error is caused by caller input.
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CharacterError::*;
        match self {
            InvalidAlignment { .. } => "CHARACTER_INVALID_ALIGNMENT",
            InvalidAbilityScore { .. } => "CHARACTER_INVALID_ABILITY_SCORE",
            InvalidAbilityKind { .. } => "CHARACTER_INVALID_ABILITY_KIND",
            InvalidLevel { .. } => "CHARACTER_INVALID_LEVEL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_offending_value() {
        let err = CharacterError::InvalidAbilityScore {
            kind: AbilityKind::Strength,
            score: 21,
        };
        assert_eq!(
            err.to_string(),
            "Invalid ability score 21 for strength (expected 1..=20)"
        );

        let err = CharacterError::InvalidAlignment {
            value: "chaotic".to_owned(),
        };
        assert_eq!(err.to_string(), "Invalid alignment <chaotic>");
    }

    #[test]
    fn all_errors_are_validation_errors() {
        let err = CharacterError::InvalidLevel { level: 0 };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "CHARACTER_INVALID_LEVEL");
        assert_eq!(err.to_string(), "Invalid level 0 (expected 1..=1000000)");
    }
}
