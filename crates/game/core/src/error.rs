//! Common error infrastructure for cavern-core.
//!
//! Domain-specific errors (`InventoryError`, `ActionError`, `PersistError`)
//! live next to the operations that raise them. Every gameplay error is
//! narrative: it is reported to the player and leaves state untouched, so no
//! severity here ever means "stop the game".

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the world is in the way (full pack, occupied tile);
///   retrying after something changes may succeed
/// - **Validation**: the request itself is wrong (empty slot, wrong category)
/// - **Corrupt**: external data failed integrity checks (save records)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Corrupt,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Corrupt => "corrupt",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all cavern-core errors.
///
/// - All error enums implement this trait
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
