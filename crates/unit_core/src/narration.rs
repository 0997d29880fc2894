//! Narration events for unit lifecycles and actions.
//!
//! Every construction, copy, assignment, disposal and action emits exactly
//! one [`Narration`] per lineage layer. Emission goes through `tracing` at
//! `info` level with this module's path as the target, carrying the
//! structured fields `unit`, `kind` and `event`. The human-readable line is
//! the event message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variant::{SpecialAction, UnitKind};

/// Tracing target used for all narration events.
pub const NARRATION_TARGET: &str = module_path!();

/// How a unit came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Constructed with the default name.
    Default,
    /// Constructed with a caller-supplied name.
    Named,
    /// Copy-constructed from another unit.
    Copy,
}

/// A single observable event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narration {
    /// A lineage layer was constructed. Copies are tagged `copied`.
    Constructed {
        /// Layer being constructed.
        kind: UnitKind,
        /// Unit name.
        name: String,
        /// How the unit was constructed.
        origin: Origin,
    },
    /// A lineage layer was overwritten by copy assignment.
    Assigned {
        /// Layer being assigned.
        kind: UnitKind,
        /// Unit name after assignment.
        name: String,
    },
    /// A lineage layer was disposed.
    Disposed {
        /// Layer being disposed.
        kind: UnitKind,
        /// Unit name.
        name: String,
    },
    /// An attack went through.
    Attacked {
        /// Attacking variant.
        kind: UnitKind,
        /// Attacker name.
        name: String,
        /// Who was attacked.
        target: String,
        /// Damage reported.
        damage: u32,
    },
    /// An attack was refused by the eligibility gate.
    AttackRejected {
        /// Attacking variant.
        kind: UnitKind,
        /// Attacker name.
        name: String,
        /// Who would have been attacked.
        target: String,
    },
    /// Damage was applied.
    DamageTaken {
        /// Damaged variant.
        kind: UnitKind,
        /// Unit name.
        name: String,
        /// Damage requested.
        amount: u32,
    },
    /// A repair went through.
    Repaired {
        /// Repaired variant.
        kind: UnitKind,
        /// Unit name.
        name: String,
        /// Hit points restored.
        amount: u32,
    },
    /// A repair was refused by the eligibility gate.
    RepairRejected {
        /// Variant.
        kind: UnitKind,
        /// Unit name.
        name: String,
        /// Hit points that would have been restored.
        amount: u32,
    },
    /// A variant-specific action was performed.
    Special {
        /// Variant.
        kind: UnitKind,
        /// Unit name.
        name: String,
        /// Which action.
        action: SpecialAction,
    },
}

impl Narration {
    /// Stable snake_case tag identifying the event type.
    #[must_use]
    pub fn event(&self) -> &'static str {
        match self {
            Self::Constructed {
                origin: Origin::Copy,
                ..
            } => "copied",
            Self::Constructed { .. } => "constructed",
            Self::Assigned { .. } => "assigned",
            Self::Disposed { .. } => "disposed",
            Self::Attacked { .. } => "attacked",
            Self::AttackRejected { .. } => "attack_rejected",
            Self::DamageTaken { .. } => "damage_taken",
            Self::Repaired { .. } => "repaired",
            Self::RepairRejected { .. } => "repair_rejected",
            Self::Special { action, .. } => action.tag(),
        }
    }

    /// Variant (or lineage layer) the event belongs to.
    #[must_use]
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Constructed { kind, .. }
            | Self::Assigned { kind, .. }
            | Self::Disposed { kind, .. }
            | Self::Attacked { kind, .. }
            | Self::AttackRejected { kind, .. }
            | Self::DamageTaken { kind, .. }
            | Self::Repaired { kind, .. }
            | Self::RepairRejected { kind, .. }
            | Self::Special { kind, .. } => *kind,
        }
    }

    /// Name of the unit the event belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Constructed { name, .. }
            | Self::Assigned { name, .. }
            | Self::Disposed { name, .. }
            | Self::Attacked { name, .. }
            | Self::AttackRejected { name, .. }
            | Self::DamageTaken { name, .. }
            | Self::Repaired { name, .. }
            | Self::RepairRejected { name, .. }
            | Self::Special { name, .. } => name,
        }
    }

    /// Whether the eligibility gate refused the action.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::AttackRejected { .. } | Self::RepairRejected { .. })
    }

    /// Log this narration and hand it back.
    pub(crate) fn emit(self) -> Self {
        tracing::info!(
            unit = %self.name(),
            kind = self.kind().label(),
            event = self.event(),
            "{}",
            self
        );
        self
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructed {
                kind,
                name,
                origin: Origin::Default,
            } => write!(f, "{kind} default constructor called ({name})"),
            Self::Constructed {
                kind,
                name,
                origin: Origin::Named,
            } => write!(f, "{kind} {name} constructor called"),
            Self::Constructed {
                kind,
                name,
                origin: Origin::Copy,
            } => write!(f, "{kind} copy constructor called ({name})"),
            Self::Assigned { kind, name } => {
                write!(f, "{kind} assignation operator called ({name})")
            }
            Self::Disposed { kind, name } => write!(f, "{kind} {name} destructor called"),
            Self::Attacked {
                kind,
                name,
                target,
                damage,
            } => write!(
                f,
                "{kind} {name} attacks {target}, causing {damage} points of damage!"
            ),
            Self::AttackRejected { kind, name, .. } => write!(f, "{kind} {name} cannot attack!"),
            Self::DamageTaken { kind, name, amount } => {
                write!(f, "{kind} {name} takes {amount} points of damage!")
            }
            Self::Repaired { kind, name, amount } => {
                write!(f, "{kind} {name} is repaired for {amount} points!")
            }
            Self::RepairRejected { kind, name, .. } => {
                write!(f, "{kind} {name} cannot be repaired!")
            }
            Self::Special {
                kind,
                name,
                action: SpecialAction::GuardGate,
            } => write!(f, "{kind} {name} is now in Gate keeper mode."),
            Self::Special {
                kind,
                name,
                action: SpecialAction::HighFives,
            } => write!(f, "{kind} {name} requests a positive high five!"),
        }
    }
}
