//! Content loaders for reading rules data from files.
//!
//! This module provides loaders that convert RON/TOML files into combat-core values.

pub mod classes;
pub mod roster;

pub use classes::ClassLoader;
pub use roster::{CharacterTemplate, RosterLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
