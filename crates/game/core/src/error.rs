//! Common error infrastructure for game-core.
//!
//! Every error type in the crate implements [`GameError`] so callers can pick a
//! recovery strategy from the severity alone. None of these errors is fatal to
//! a battle: the resolver turns them into narrated events and keeps going.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: inventory full, potion stack exhausted
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: target index out of range, unknown enemy name
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
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
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failure to add a piece of equipment to a player's loadout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    #[error("equipment inventory full ({capacity} pieces)")]
    InventoryFull { capacity: usize },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InventoryFull { .. } => "EQUIP_INVENTORY_FULL",
        }
    }
}

/// Failure of an in-battle sub-selection (attack target or potion).
///
/// The action that raised it is cancelled with no state change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionError {
    #[error("target {index:?} is not one of the {available} living enemies")]
    TargetOutOfRange {
        index: Option<usize>,
        available: usize,
    },

    #[error("potion {index:?} is not one of the {available} listed potions")]
    PotionOutOfRange {
        index: Option<usize>,
        available: usize,
    },

    #[error("no potions in inventory")]
    NoPotions,

    #[error("potion could not be consumed")]
    PotionUnavailable,
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TargetOutOfRange { .. } | Self::PotionOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::NoPotions | Self::PotionUnavailable => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetOutOfRange { .. } => "SELECTION_TARGET_OUT_OF_RANGE",
            Self::PotionOutOfRange { .. } => "SELECTION_POTION_OUT_OF_RANGE",
            Self::NoPotions => "SELECTION_NO_POTIONS",
            Self::PotionUnavailable => "SELECTION_POTION_UNAVAILABLE",
        }
    }
}

/// An identifier did not name any known enemy, equipment, or potion kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {category} `{name}`")]
pub struct ParseKindError {
    pub category: &'static str,
    pub name: String,
}

impl ParseKindError {
    pub fn new(category: &'static str, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

impl GameError for ParseKindError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "PARSE_UNKNOWN_KIND"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_errors_are_classified() {
        let out_of_range = SelectionError::TargetOutOfRange {
            index: Some(4),
            available: 2,
        };
        assert_eq!(out_of_range.severity(), ErrorSeverity::Validation);
        assert_eq!(out_of_range.error_code(), "SELECTION_TARGET_OUT_OF_RANGE");
        assert!(SelectionError::NoPotions.severity().is_recoverable());
    }

    #[test]
    fn equip_error_message_names_capacity() {
        let err = EquipError::InventoryFull { capacity: 3 };
        assert_eq!(err.to_string(), "equipment inventory full (3 pieces)");
        assert!(!err.severity().is_internal());
    }
}
