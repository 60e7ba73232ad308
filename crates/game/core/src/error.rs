//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (e.g. [`CharacterError`](crate::character::CharacterError))
//! are defined alongside the entities they validate. This module only provides the
//! shared classification used by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each domain has its own error type with specific variants
//! - **Fail Before Write**: Validation happens before any field is mutated
//! - **Deterministic**: No transient or retriable failures exist in the rules engine

/// Severity level of an error, used for categorization and handling strategies.
///
/// Rules are deterministic arithmetic over validated state, so the only class
/// of failure is invalid input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: ability score out of range, unknown alignment name
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait RuleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
