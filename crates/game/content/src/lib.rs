//! Data-driven content for the combat rules.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Class rules (data-driven via TOML)
//! - Character rosters (data-driven via RON)
//!
//! All loaders build combat-core types directly; names in data files are parsed
//! through the same validation the rules engine applies at runtime.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CharacterTemplate, ClassLoader, LoadResult, RosterLoader};
