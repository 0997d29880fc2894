//! Unit variants and their resource profiles.
//!
//! Every unit shares one state shape; variants differ only in:
//! - The resource profile set at construction
//! - The label used when narrating
//! - An optional extra action with no resource interaction
//!
//! [`UnitKind`] is the runtime tag. The zero-sized marker types
//! ([`Base`], [`HeavyDefense`], [`HeavyOffense`]) carry the same tag at the
//! type level so `Unit<V>` can only be copied into a unit of the same variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime tag for a unit variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitKind {
    /// Baseline unit with small reserves and no damage.
    #[default]
    Base,
    /// Sturdy unit that can hold a gate.
    HeavyDefense,
    /// Hard-hitting unit with deep energy reserves.
    HeavyOffense,
}

impl UnitKind {
    /// All variants, in specialization order.
    pub const ALL: [UnitKind; 3] = [Self::Base, Self::HeavyDefense, Self::HeavyOffense];

    /// Resources a freshly constructed unit of this kind starts with.
    #[must_use]
    pub const fn profile(self) -> UnitProfile {
        match self {
            Self::Base => UnitProfile::new(10, 10, 0),
            Self::HeavyDefense => UnitProfile::new(100, 50, 20),
            Self::HeavyOffense => UnitProfile::new(100, 100, 30),
        }
    }

    /// Label used in narration lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "ClapTrap",
            Self::HeavyDefense => "ScavTrap",
            Self::HeavyOffense => "FragTrap",
        }
    }

    /// The extra action this variant adds, if any.
    #[must_use]
    pub const fn special_action(self) -> Option<SpecialAction> {
        match self {
            Self::Base => None,
            Self::HeavyDefense => Some(SpecialAction::GuardGate),
            Self::HeavyOffense => Some(SpecialAction::HighFives),
        }
    }

    /// Layers narrated when a unit of this kind is constructed, outermost last.
    ///
    /// Specialized variants build on the base layer, so construction narrates
    /// the base first and disposal walks this list in reverse.
    #[must_use]
    pub const fn lineage(self) -> &'static [UnitKind] {
        match self {
            Self::Base => &[Self::Base],
            Self::HeavyDefense => &[Self::Base, Self::HeavyDefense],
            Self::HeavyOffense => &[Self::Base, Self::HeavyOffense],
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Starting resources for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitProfile {
    /// Starting health.
    pub hit_points: u32,
    /// Starting energy.
    pub energy_points: u32,
    /// Damage reported by every successful attack.
    pub attack_damage: u32,
}

impl UnitProfile {
    /// Create a new profile.
    #[must_use]
    pub const fn new(hit_points: u32, energy_points: u32, attack_damage: u32) -> Self {
        Self {
            hit_points,
            energy_points,
            attack_damage,
        }
    }
}

/// Variant-specific action with no eligibility gate and no resource cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAction {
    /// Heavy-Defense enters gate keeper mode.
    GuardGate,
    /// Heavy-Offense asks for a high five.
    HighFives,
}

impl SpecialAction {
    /// Stable snake_case tag for the action.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::GuardGate => "guard_gate",
            Self::HighFives => "high_fives",
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Base {}
    impl Sealed for super::HeavyDefense {}
    impl Sealed for super::HeavyOffense {}
}

/// Type-level variant marker.
///
/// Sealed: the set of variants is closed.
pub trait Variant: sealed::Sealed + 'static {
    /// Runtime tag for this variant.
    const KIND: UnitKind;
}

/// Marker for [`UnitKind::Base`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Base;

/// Marker for [`UnitKind::HeavyDefense`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeavyDefense;

/// Marker for [`UnitKind::HeavyOffense`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeavyOffense;

impl Variant for Base {
    const KIND: UnitKind = UnitKind::Base;
}

impl Variant for HeavyDefense {
    const KIND: UnitKind = UnitKind::HeavyDefense;
}

impl Variant for HeavyOffense {
    const KIND: UnitKind = UnitKind::HeavyOffense;
}
