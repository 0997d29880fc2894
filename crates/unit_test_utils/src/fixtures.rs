//! Test fixtures and helpers.
//!
//! Pre-built unit states for consistent testing.

use unit_core::roster::AnyUnit;
use unit_core::unit::Unit;
use unit_core::variant::{UnitKind, Variant};

/// Attack until the eligibility gate refuses, returning how many went through.
pub fn exhaust_energy<V: Variant>(unit: &mut Unit<V>) -> u32 {
    let mut landed = 0;
    while !unit.attack("training dummy").is_rejection() {
        landed += 1;
    }
    landed
}

/// A named unit of `kind` with its hit points already at zero.
#[must_use]
pub fn wrecked(kind: UnitKind, name: &str) -> AnyUnit {
    let mut unit = AnyUnit::spawn(kind, Some(name));
    unit.take_damage(u32::MAX);
    unit
}

/// One named unit of every variant.
#[must_use]
pub fn one_of_each() -> Vec<AnyUnit> {
    UnitKind::ALL
        .iter()
        .map(|kind| AnyUnit::spawn(*kind, Some(kind.label())))
        .collect()
}
