//! Class rules loader.

use std::path::Path;

use combat_core::ClassRules;

use crate::loaders::{LoadResult, read_file};

/// TOML layout: a list of `[[classes]]` tables.
#[derive(serde::Deserialize)]
struct ClassTable {
    classes: Vec<ClassRules>,
}

/// Loader for class rules from TOML files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class rules from a TOML file.
    ///
    /// # Format
    ///
    /// ```toml
    /// [[classes]]
    /// name = "fighter"
    /// attack_progression = "every_level"
    /// ```
    ///
    /// `attack_progression` defaults to `every_other_level`. Class names must be
    /// unique.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassRules>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse class rules from TOML text.
    pub fn parse(content: &str) -> LoadResult<Vec<ClassRules>> {
        let table: ClassTable = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class rules TOML: {}", e))?;

        for (index, class) in table.classes.iter().enumerate() {
            if table.classes[..index].iter().any(|c| c.name == class.name) {
                anyhow::bail!("Duplicate class '{}' in class rules", class.name);
            }
        }

        tracing::debug!("Loaded {} class rule sets", table.classes.len());
        Ok(table.classes)
    }
}
