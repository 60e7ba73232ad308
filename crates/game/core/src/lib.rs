//! Deterministic d20 combat rules.
//!
//! `combat-core` decides whether an attack lands, how much damage it deals, and
//! tracks the resulting character changes (hit points, experience, levels). It is
//! a pure rules engine: the die roll is always supplied by the caller and damage
//! is applied to the defender by the caller.
//!
//! ```text
//! [ stats: ability scores → modifiers ]
//!      ↓
//! [ character: hit points, level, experience, attack/defense ]
//!      ↓
//! [ combat: hit check → damage → experience for the attacker ]
//! ```
pub mod character;
pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod stats;

pub use character::{
    Alignment, AttackProgression, Character, CharacterError, ClassRules, CombatStats,
    ExperienceSink,
};
pub use combat::{AttackOutcome, AttackResult, CombatResolution, resolve_attack};
pub use config::RulesConfig;
pub use dice::{PcgRng, RollOracle, compute_seed};
pub use error::{ErrorSeverity, RuleError};
pub use stats::{AbilityKind, AbilityScores, modifier_of};
