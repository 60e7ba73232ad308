//! Moral alignment of a character.

use super::CharacterError;

/// Character alignment.
///
/// A closed set: values outside it can only appear as text at a parsing boundary
/// and are rejected there.
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
pub enum Alignment {
    Good,
    #[default]
    Neutral,
    Evil,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Good, Alignment::Neutral, Alignment::Evil];

    /// Parse an alignment from its name.
    ///
    /// Fails with [`CharacterError::InvalidAlignment`] for anything other than
    /// `good`, `neutral` or `evil` (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, CharacterError> {
        name.parse().map_err(|_| CharacterError::InvalidAlignment {
            value: name.to_owned(),
        })
    }
}
