//! Stat system: ability scores and the modifiers derived from them.
//!
//! ```text
//! [ Ability scores (stored, validated to [1, 20]) ]
//!      ↓
//! [ Modifiers (floor((score - 10) / 2), computed on demand) ]
//! ```

pub mod abilities;
pub mod modifiers;

pub use abilities::{AbilityKind, AbilityScores};
pub use modifiers::modifier_of;
