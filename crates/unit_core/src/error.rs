//! Error types for rosters and scripted scenarios.
//!
//! Unit actions themselves never fail; these errors only come from looking
//! up units by slot name or from malformed scenario data.

use thiserror::Error;

use crate::variant::UnitKind;

/// Result type alias using [`UnitError`].
pub type Result<T> = std::result::Result<T, UnitError>;

/// Top-level error type for roster and scenario operations.
#[derive(Debug, Error)]
pub enum UnitError {
    /// No unit occupies the named slot.
    #[error("Unknown roster slot: {0}")]
    UnknownSlot(String),

    /// A unit already occupies the named slot.
    #[error("Roster slot already occupied: {0}")]
    DuplicateSlot(String),

    /// Copy or assignment between units of different variants.
    #[error("Cannot copy a {from} into a {to}")]
    VariantMismatch {
        /// Variant of the source unit.
        from: UnitKind,
        /// Variant of the destination unit.
        to: UnitKind,
    },

    /// The unit's variant has no extra action.
    #[error("Unit in slot '{slot}' is a {kind}, which has no special action")]
    UnsupportedAction {
        /// Slot of the unit.
        slot: String,
        /// Variant of the unit.
        kind: UnitKind,
    },

    /// Repeats expand to more steps than a scenario may run.
    #[error("Scenario expands to {steps} steps, limit is {limit}")]
    StepLimitExceeded {
        /// Total steps after expanding every `Repeat`, saturated at `u64::MAX`.
        steps: u64,
        /// Maximum allowed.
        limit: u64,
    },

    /// Scenario text could not be parsed.
    #[error("Failed to parse scenario: {0}")]
    ScenarioParse(#[from] ron::error::SpannedError),
}
