//! Character roster loader.
//!
//! Rosters name alignments, classes and abilities as text. The names are parsed
//! here, so an unknown alignment or ability, or an out-of-range score, is
//! reported with the offending character's name instead of being silently
//! replaced by a default.

use std::path::Path;

use combat_core::{Alignment, Character, CharacterError, ClassRules};

use crate::loaders::{LoadResult, read_file};

/// One character entry in a roster file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CharacterTemplate {
    pub name: String,
    #[serde(default = "CharacterTemplate::default_alignment")]
    pub alignment: String,
    /// Class name; defaults to the commoner rules.
    #[serde(default)]
    pub class: Option<String>,
    /// Starting level; when present hit points are recomputed for it.
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub armor_class: Option<i32>,
    /// `(ability name, score)` pairs; unlisted abilities stay at 10.
    #[serde(default)]
    pub abilities: Vec<(String, i32)>,
}

impl CharacterTemplate {
    fn default_alignment() -> String {
        Alignment::default().to_string()
    }

    /// Build a character, resolving the class against `classes`.
    ///
    /// Abilities are applied before the level so that level hit points include the
    /// constitution modifier.
    pub fn build(&self, classes: &[ClassRules]) -> LoadResult<Character> {
        let context =
            |e: CharacterError| anyhow::anyhow!("Invalid character '{}': {}", self.name, e);

        let alignment = Alignment::from_name(&self.alignment).map_err(context)?;
        let mut character = Character::with_alignment(self.name.as_str(), alignment);

        if let Some(class_name) = &self.class {
            let class = classes
                .iter()
                .find(|class| &class.name == class_name)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid character '{}': unknown class '{}'",
                        self.name,
                        class_name
                    )
                })?;
            character.set_class(class.clone());
        }

        for (ability, score) in &self.abilities {
            character
                .set_ability_score_named(ability, *score)
                .map_err(context)?;
        }

        if let Some(level) = self.level {
            character.set_level(level).map_err(context)?;
        }

        if let Some(armor_class) = self.armor_class {
            character.set_armor_class(armor_class);
        }

        Ok(character)
    }
}

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<CharacterTemplate>`
    ///
    /// ```ron
    /// [
    ///     (
    ///         name: "Luna",
    ///         alignment: "good",
    ///         class: Some("fighter"),
    ///         level: Some(2),
    ///         abilities: [("strength", 14), ("constitution", 12)],
    ///     ),
    /// ]
    /// ```
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    /// * `classes` - Class rules that roster entries may refer to by name
    pub fn load(path: &Path, classes: &[ClassRules]) -> LoadResult<Vec<Character>> {
        let content = read_file(path)?;
        Self::parse(&content, classes)
    }

    /// Parse a roster from RON text.
    pub fn parse(content: &str, classes: &[ClassRules]) -> LoadResult<Vec<Character>> {
        let templates: Vec<CharacterTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let characters = templates
            .iter()
            .map(|template| template.build(classes))
            .collect::<LoadResult<Vec<_>>>()?;

        tracing::debug!("Loaded roster of {} characters", characters.len());
        Ok(characters)
    }
}
