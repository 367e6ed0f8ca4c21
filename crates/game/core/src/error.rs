//! Common error infrastructure for game-core.
//!
//! Domain errors (`DungeonError`, `MoveError`, `InventoryError`, ...) live next
//! to the types they validate. This module provides the severity
//! classification the interface layer uses to decide whether a failure is a
//! message for the player or the end of the session.
//!
//! # Severity Classes
//!
//! - **Recoverable**: the command was legal but the world said no (blocked path)
//! - **Validation**: the command referred to something that does not fit (bad index)
//! - **Internal**: an invariant was broken (container underflow, missing room)
//! - **Fatal**: the game cannot start or continue at all (unreadable world)

use dungeon_collections::CollectionError;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Expected outcome of normal play; report it and keep going.
    ///
    /// Examples: enemies guarding the exit, no room behind the player
    Recoverable,

    /// Invalid input; report it and keep going.
    ///
    /// Examples: no item at that index, item is not a weapon
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: dequeuing from an empty enemy queue, dungeon without rooms
    /// These indicate bugs and end the session.
    Internal,

    /// Unrecoverable error; the game cannot run.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// Container misuse inside the game is always a broken invariant: callers
// check `has_enemies`/`is_empty` before taking elements out.
impl GameError for CollectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyContainer => "EMPTY_CONTAINER",
            Self::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_partitions() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Internal.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[test]
    fn container_misuse_is_internal() {
        let error = CollectionError::EmptyContainer;
        assert!(error.severity().is_internal());
        assert_eq!(error.error_code(), "EMPTY_CONTAINER");
    }
}
