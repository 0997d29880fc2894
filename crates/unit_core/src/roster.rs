//! Type-erased units stored by slot name.
//!
//! Scripted scenarios pick variants at runtime, so the roster stores
//! [`AnyUnit`] values. Copy and assignment between slots are checked here
//! because the type system can no longer rule out mixing variants.
//!
//! The roster keeps insertion order and drops its units in reverse, so
//! disposal narration mirrors stack unwinding.

use crate::error::{Result, UnitError};
use crate::narration::Narration;
use crate::unit::{ClapTrap, FragTrap, ScavTrap, UnitSnapshot};
use crate::variant::UnitKind;

/// A unit of any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyUnit {
    /// Base variant.
    Base(ClapTrap),
    /// Heavy-Defense variant.
    HeavyDefense(ScavTrap),
    /// Heavy-Offense variant.
    HeavyOffense(FragTrap),
}

impl AnyUnit {
    /// Construct a unit of `kind`, named or default.
    #[must_use]
    pub fn spawn(kind: UnitKind, name: Option<&str>) -> Self {
        match (kind, name) {
            (UnitKind::Base, Some(name)) => Self::Base(ClapTrap::new(name)),
            (UnitKind::Base, None) => Self::Base(ClapTrap::default()),
            (UnitKind::HeavyDefense, Some(name)) => Self::HeavyDefense(ScavTrap::new(name)),
            (UnitKind::HeavyDefense, None) => Self::HeavyDefense(ScavTrap::default()),
            (UnitKind::HeavyOffense, Some(name)) => Self::HeavyOffense(FragTrap::new(name)),
            (UnitKind::HeavyOffense, None) => Self::HeavyOffense(FragTrap::default()),
        }
    }

    /// Variant tag.
    #[must_use]
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Base(_) => UnitKind::Base,
            Self::HeavyDefense(_) => UnitKind::HeavyDefense,
            Self::HeavyOffense(_) => UnitKind::HeavyOffense,
        }
    }

    /// Unit name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Base(unit) => unit.name(),
            Self::HeavyDefense(unit) => unit.name(),
            Self::HeavyOffense(unit) => unit.name(),
        }
    }

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> UnitSnapshot {
        match self {
            Self::Base(unit) => unit.snapshot(),
            Self::HeavyDefense(unit) => unit.snapshot(),
            Self::HeavyOffense(unit) => unit.snapshot(),
        }
    }

    /// See [`crate::unit::Unit::attack`].
    pub fn attack(&mut self, target: &str) -> Narration {
        match self {
            Self::Base(unit) => unit.attack(target),
            Self::HeavyDefense(unit) => unit.attack(target),
            Self::HeavyOffense(unit) => unit.attack(target),
        }
    }

    /// See [`crate::unit::Unit::take_damage`].
    pub fn take_damage(&mut self, amount: u32) -> Narration {
        match self {
            Self::Base(unit) => unit.take_damage(amount),
            Self::HeavyDefense(unit) => unit.take_damage(amount),
            Self::HeavyOffense(unit) => unit.take_damage(amount),
        }
    }

    /// See [`crate::unit::Unit::be_repaired`].
    pub fn be_repaired(&mut self, amount: u32) -> Narration {
        match self {
            Self::Base(unit) => unit.be_repaired(amount),
            Self::HeavyDefense(unit) => unit.be_repaired(amount),
            Self::HeavyOffense(unit) => unit.be_repaired(amount),
        }
    }

    /// See [`crate::unit::Unit::special`].
    pub fn special(&self) -> Option<Narration> {
        match self {
            Self::Base(unit) => unit.special(),
            Self::HeavyDefense(unit) => unit.special(),
            Self::HeavyOffense(unit) => unit.special(),
        }
    }

    /// Narrate an assignment of the unit onto itself. State is unchanged.
    pub(crate) fn narrate_self_assignment(&self) {
        match self {
            Self::Base(unit) => unit.narrate_assigned(),
            Self::HeavyDefense(unit) => unit.narrate_assigned(),
            Self::HeavyOffense(unit) => unit.narrate_assigned(),
        }
    }

    /// Copy assignment from another unit of the same variant.
    pub fn assign_from(&mut self, source: &AnyUnit) -> Result<()> {
        match (self, source) {
            (Self::Base(target), Self::Base(source)) => target.clone_from(source),
            (Self::HeavyDefense(target), Self::HeavyDefense(source)) => {
                target.clone_from(source);
            }
            (Self::HeavyOffense(target), Self::HeavyOffense(source)) => {
                target.clone_from(source);
            }
            (target, source) => {
                return Err(UnitError::VariantMismatch {
                    from: source.kind(),
                    to: target.kind(),
                })
            }
        }
        Ok(())
    }
}

/// Live units keyed by slot name, in insertion order.
#[derive(Debug, Default)]
pub struct Roster {
    units: Vec<(String, AnyUnit)>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// No live units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Slot names in insertion order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|(slot, _)| slot.as_str())
    }

    fn index_of(&self, slot: &str) -> Result<usize> {
        self.units
            .iter()
            .position(|(name, _)| name == slot)
            .ok_or_else(|| UnitError::UnknownSlot(slot.to_string()))
    }

    /// Place a unit into an empty slot.
    ///
    /// On a duplicate slot the unit is dropped (and narrates its disposal).
    pub fn insert(&mut self, slot: impl Into<String>, unit: AnyUnit) -> Result<()> {
        let slot = slot.into();
        if self.index_of(&slot).is_ok() {
            return Err(UnitError::DuplicateSlot(slot));
        }
        tracing::debug!(slot = %slot, kind = %unit.kind(), "unit added to roster");
        self.units.push((slot, unit));
        Ok(())
    }

    /// Construct a unit directly into an empty slot.
    pub fn spawn(&mut self, slot: &str, kind: UnitKind, name: Option<&str>) -> Result<()> {
        if self.index_of(slot).is_ok() {
            return Err(UnitError::DuplicateSlot(slot.to_string()));
        }
        self.insert(slot, AnyUnit::spawn(kind, name))
    }

    /// Borrow the unit in `slot`.
    pub fn get(&self, slot: &str) -> Result<&AnyUnit> {
        let index = self.index_of(slot)?;
        Ok(&self.units[index].1)
    }

    /// Mutably borrow the unit in `slot`.
    pub fn get_mut(&mut self, slot: &str) -> Result<&mut AnyUnit> {
        let index = self.index_of(slot)?;
        Ok(&mut self.units[index].1)
    }

    /// Take the unit out of `slot`.
    pub fn remove(&mut self, slot: &str) -> Result<AnyUnit> {
        let index = self.index_of(slot)?;
        Ok(self.units.remove(index).1)
    }

    /// Copy-construct the unit in `from` into the empty slot `to`.
    pub fn copy_into(&mut self, from: &str, to: &str) -> Result<()> {
        if self.index_of(to).is_ok() {
            return Err(UnitError::DuplicateSlot(to.to_string()));
        }
        let copy = self.get(from)?.clone();
        self.insert(to, copy)
    }

    /// Copy-assign the unit in `from` onto the unit in `to`.
    ///
    /// Assigning a slot to itself leaves the unit untouched but still
    /// narrates the assignment.
    pub fn assign(&mut self, from: &str, to: &str) -> Result<()> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        if source == target {
            tracing::debug!(slot = %to, "self-assignment, fields kept");
            self.units[target].1.narrate_self_assignment();
            return Ok(());
        }

        let (source_unit, target_unit) = if source < target {
            let (head, tail) = self.units.split_at_mut(target);
            (&head[source].1, &mut tail[0].1)
        } else {
            let (head, tail) = self.units.split_at_mut(source);
            (&tail[0].1, &mut head[target].1)
        };
        target_unit.assign_from(source_unit)
    }

    /// Snapshots of every live unit, in insertion order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<(String, UnitSnapshot)> {
        self.units
            .iter()
            .map(|(slot, unit)| (slot.clone(), unit.snapshot()))
            .collect()
    }
}

impl Drop for Roster {
    fn drop(&mut self) {
        while let Some((slot, unit)) = self.units.pop() {
            tracing::debug!(slot = %slot, "roster slot released");
            drop(unit);
        }
    }
}
