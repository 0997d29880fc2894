//! Proptest strategies for unit testing.
//!
//! These strategies generate random but reproducible unit kinds, amounts
//! and action sequences for property-based testing of the unit state
//! machine.

use proptest::prelude::*;

use unit_core::narration::Narration;
use unit_core::roster::AnyUnit;
use unit_core::variant::UnitKind;

/// An action that can be applied to any unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Attack a dummy target.
    Attack,
    /// Take this much damage.
    TakeDamage(u32),
    /// Be repaired by this much.
    Repair(u32),
    /// Perform the variant's extra action (skipped for variants without one).
    Special,
}

impl Action {
    /// Apply the action, returning its narration if it produced one.
    pub fn apply(self, unit: &mut AnyUnit) -> Option<Narration> {
        match self {
            Action::Attack => Some(unit.attack("dummy")),
            Action::TakeDamage(amount) => Some(unit.take_damage(amount)),
            Action::Repair(amount) => Some(unit.be_repaired(amount)),
            Action::Special => unit.special(),
        }
    }
}

/// Generate any unit kind.
pub fn arb_unit_kind() -> impl Strategy<Value = UnitKind> {
    prop_oneof![
        Just(UnitKind::Base),
        Just(UnitKind::HeavyDefense),
        Just(UnitKind::HeavyOffense),
    ]
}

/// Generate unit names (1-12 printable characters).
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z0-9-]{1,12}"
}

/// Generate damage or repair amounts (0-200), wide enough to cross every profile.
pub fn arb_amount() -> impl Strategy<Value = u32> {
    0u32..200u32
}

/// Generate a single action.
pub fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Attack),
        arb_amount().prop_map(Action::TakeDamage),
        arb_amount().prop_map(Action::Repair),
        Just(Action::Special),
    ]
}

/// Generate a sequence of actions.
pub fn arb_action_sequence(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(arb_action(), 0..max_len)
}
