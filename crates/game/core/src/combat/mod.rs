//! Combat resolution system.
//!
//! # Architecture
//!
//! - **Pure Functions**: `hit`, `damage` and `resolve_attack` are side-effect free
//! - **Snapshot-based**: Participants are read through [`CombatStats`](crate::CombatStats)
//!   locked when the attack is initiated
//! - **One side effect**: [`CombatResolution::resolve`] grants the attacker experience
//!   on a landed attack through [`ExperienceSink`](crate::ExperienceSink)
//!
//! Damage is never applied to the defender here; the caller passes the returned
//! amount to [`Character::apply_damage`](crate::Character::apply_damage).
//!
//! # Core Functions
//!
//! - `is_critical`: natural 20 check
//! - `check_hit`: modified roll vs defense
//! - `calculate_damage`: base point + strength, doubled on a critical
//! - `resolve_attack`: complete attack resolution without side effects

pub mod damage;
pub mod hit;
pub mod resolution;
pub mod result;

pub use damage::calculate_damage;
pub use hit::{check_hit, effective_attack_roll, is_critical};
pub use resolution::CombatResolution;
pub use result::{AttackOutcome, AttackResult, resolve_attack};
