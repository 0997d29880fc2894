//! The combat unit entity.
//!
//! A [`Unit`] owns its name and three resource counters. All three variants
//! share the same state machine:
//!
//! - `attack` and `be_repaired` require energy **and** health
//! - `take_damage` always applies and clamps health at zero
//! - the variant's extra action (if any) is unconditional and free
//!
//! Lifecycle hooks map onto Rust's own: [`Clone::clone`] is copy construction,
//! [`Clone::clone_from`] is copy assignment and [`Drop`] is scope exit. Each
//! narrates once per lineage layer (see [`UnitKind::lineage`]).

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::narration::{Narration, Origin};
use crate::variant::{Base, HeavyDefense, HeavyOffense, SpecialAction, UnitKind, Variant};

/// Name given to units built with [`Default`].
pub const DEFAULT_NAME: &str = "Default";

/// Base variant unit.
pub type ClapTrap = Unit<Base>;
/// Heavy-Defense variant unit.
pub type ScavTrap = Unit<HeavyDefense>;
/// Heavy-Offense variant unit.
pub type FragTrap = Unit<HeavyOffense>;

/// A combat unit of variant `V`.
pub struct Unit<V: Variant> {
    name: String,
    hit_points: u32,
    energy_points: u32,
    attack_damage: u32,
    variant: PhantomData<V>,
}

impl<V: Variant> Unit<V> {
    /// Construct a unit with the given name and the variant's profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self::construct(name.into(), Origin::Named)
    }

    fn construct(name: String, origin: Origin) -> Self {
        let profile = V::KIND.profile();
        let unit = Self {
            name,
            hit_points: profile.hit_points,
            energy_points: profile.energy_points,
            attack_damage: profile.attack_damage,
            variant: PhantomData,
        };
        unit.narrate_lineage(origin);
        unit
    }

    fn narrate_lineage(&self, origin: Origin) {
        for &kind in V::KIND.lineage() {
            Narration::Constructed {
                kind,
                name: self.name.clone(),
                origin,
            }
            .emit();
        }
    }

    /// Assignment narration, variant layer first.
    pub(crate) fn narrate_assigned(&self) {
        for &kind in V::KIND.lineage().iter().rev() {
            Narration::Assigned {
                kind,
                name: self.name.clone(),
            }
            .emit();
        }
    }

    /// Variant tag.
    #[must_use]
    pub fn kind(&self) -> UnitKind {
        V::KIND
    }

    /// Unit name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health.
    #[must_use]
    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Current energy.
    #[must_use]
    pub fn energy_points(&self) -> u32 {
        self.energy_points
    }

    /// Damage reported per successful attack.
    #[must_use]
    pub fn attack_damage(&self) -> u32 {
        self.attack_damage
    }

    /// Health above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Energy above zero.
    #[must_use]
    pub fn has_energy(&self) -> bool {
        self.energy_points > 0
    }

    /// Eligibility gate shared by [`Self::attack`] and [`Self::be_repaired`].
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.has_energy() && self.is_alive()
    }

    /// Attack `target`, spending one energy point.
    ///
    /// Refused without side effects when the unit is out of energy or health.
    pub fn attack(&mut self, target: &str) -> Narration {
        let narration = if self.can_act() {
            self.energy_points -= 1;
            Narration::Attacked {
                kind: V::KIND,
                name: self.name.clone(),
                target: target.to_string(),
                damage: self.attack_damage,
            }
        } else {
            Narration::AttackRejected {
                kind: V::KIND,
                name: self.name.clone(),
                target: target.to_string(),
            }
        };
        tracing::debug!(
            unit = %self.name,
            energy_points = self.energy_points,
            "attack resolved"
        );
        narration.emit()
    }

    /// Lose `amount` hit points, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) -> Narration {
        if amount >= self.hit_points {
            self.hit_points = 0;
        } else {
            self.hit_points -= amount;
        }
        tracing::debug!(unit = %self.name, hit_points = self.hit_points, "damage applied");
        Narration::DamageTaken {
            kind: V::KIND,
            name: self.name.clone(),
            amount,
        }
        .emit()
    }

    /// Regain `amount` hit points, spending one energy point.
    ///
    /// Healing has no upper cap. Hit points saturate at `u32::MAX`, so at
    /// that extreme less than `amount` is added. Refused without side
    /// effects when the unit is out of energy or health.
    pub fn be_repaired(&mut self, amount: u32) -> Narration {
        let narration = if self.can_act() {
            self.hit_points = self.hit_points.saturating_add(amount);
            self.energy_points -= 1;
            Narration::Repaired {
                kind: V::KIND,
                name: self.name.clone(),
                amount,
            }
        } else {
            Narration::RepairRejected {
                kind: V::KIND,
                name: self.name.clone(),
                amount,
            }
        };
        tracing::debug!(
            unit = %self.name,
            hit_points = self.hit_points,
            energy_points = self.energy_points,
            "repair resolved"
        );
        narration.emit()
    }

    /// Perform the variant's extra action, if it has one.
    pub fn special(&self) -> Option<Narration> {
        V::KIND
            .special_action()
            .map(|action| self.narrate_special(action))
    }

    fn narrate_special(&self, action: SpecialAction) -> Narration {
        Narration::Special {
            kind: V::KIND,
            name: self.name.clone(),
            action,
        }
        .emit()
    }

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            kind: V::KIND,
            name: self.name.clone(),
            hit_points: self.hit_points,
            energy_points: self.energy_points,
            attack_damage: self.attack_damage,
        }
    }
}

impl Unit<HeavyDefense> {
    /// Enter gate keeper mode. Always succeeds; costs nothing.
    pub fn guard_gate(&self) -> Narration {
        self.narrate_special(SpecialAction::GuardGate)
    }
}

impl Unit<HeavyOffense> {
    /// Ask for a high five. Always succeeds; costs nothing.
    pub fn high_fives_guys(&self) -> Narration {
        self.narrate_special(SpecialAction::HighFives)
    }
}

impl<V: Variant> Default for Unit<V> {
    fn default() -> Self {
        Self::construct(DEFAULT_NAME.to_string(), Origin::Default)
    }
}

impl<V: Variant> Clone for Unit<V> {
    fn clone(&self) -> Self {
        let copy = Self {
            name: self.name.clone(),
            hit_points: self.hit_points,
            energy_points: self.energy_points,
            attack_damage: self.attack_damage,
            variant: PhantomData,
        };
        copy.narrate_lineage(Origin::Copy);
        copy
    }

    /// Copy assignment: every field, name included, is replaced.
    ///
    /// `&mut self` and `&Self` cannot alias, so self-assignment is ruled out
    /// by the borrow checker rather than checked at runtime.
    fn clone_from(&mut self, source: &Self) {
        self.name.clone_from(&source.name);
        self.hit_points = source.hit_points;
        self.energy_points = source.energy_points;
        self.attack_damage = source.attack_damage;
        self.narrate_assigned();
    }
}

impl<V: Variant> Drop for Unit<V> {
    fn drop(&mut self) {
        for &kind in V::KIND.lineage().iter().rev() {
            Narration::Disposed {
                kind,
                name: self.name.clone(),
            }
            .emit();
        }
    }
}

impl<V: Variant> PartialEq for Unit<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.hit_points == other.hit_points
            && self.energy_points == other.energy_points
            && self.attack_damage == other.attack_damage
    }
}

impl<V: Variant> Eq for Unit<V> {}

impl<V: Variant> fmt::Debug for Unit<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("kind", &V::KIND)
            .field("name", &self.name)
            .field("hit_points", &self.hit_points)
            .field("energy_points", &self.energy_points)
            .field("attack_damage", &self.attack_damage)
            .finish()
    }
}

/// Point-in-time copy of a unit's state.
///
/// Taking a snapshot narrates nothing, unlike cloning the unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitSnapshot {
    /// Variant.
    pub kind: UnitKind,
    /// Name.
    pub name: String,
    /// Health.
    pub hit_points: u32,
    /// Energy.
    pub energy_points: u32,
    /// Damage per attack.
    pub attack_damage: u32,
}

impl UnitSnapshot {
    /// State of a freshly constructed unit.
    #[must_use]
    pub fn fresh(kind: UnitKind, name: impl Into<String>) -> Self {
        let profile = kind.profile();
        Self {
            kind,
            name: name.into(),
            hit_points: profile.hit_points,
            energy_points: profile.energy_points,
            attack_damage: profile.attack_damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_construction_uses_profile() {
        let clap = ClapTrap::new("CLAP-01");
        assert_eq!(clap.snapshot(), UnitSnapshot::fresh(UnitKind::Base, "CLAP-01"));

        let scav = ScavTrap::new("SC4V-TP");
        assert_eq!(
            scav.snapshot(),
            UnitSnapshot::fresh(UnitKind::HeavyDefense, "SC4V-TP")
        );

        let frag = FragTrap::new("FR4G-TP");
        assert_eq!(
            frag.snapshot(),
            UnitSnapshot::fresh(UnitKind::HeavyOffense, "FR4G-TP")
        );
    }

    #[test]
    fn test_default_construction() {
        let scav = ScavTrap::default();
        assert_eq!(scav.name(), DEFAULT_NAME);
        assert_eq!(scav.hit_points(), 100);
        assert_eq!(scav.energy_points(), 50);
        assert_eq!(scav.attack_damage(), 20);
    }

    #[test]
    fn test_attack_spends_energy_only() {
        let mut frag = FragTrap::new("FR4G-TP");
        let narration = frag.attack("enemy");

        assert_eq!(frag.energy_points(), 99);
        assert_eq!(frag.hit_points(), 100);
        assert_eq!(
            narration,
            Narration::Attacked {
                kind: UnitKind::HeavyOffense,
                name: "FR4G-TP".to_string(),
                target: "enemy".to_string(),
                damage: 30,
            }
        );
    }

    #[test]
    fn test_base_energy_exhaustion() {
        let mut clap = ClapTrap::new("ENERGY-TEST");
        for _ in 0..10 {
            assert!(!clap.attack("target").is_rejection());
        }
        assert_eq!(clap.energy_points(), 0);

        assert!(clap.attack("target").is_rejection());
        assert!(clap.be_repaired(1).is_rejection());
        assert_eq!(clap.energy_points(), 0);
        assert_eq!(clap.hit_points(), 10);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut clap = ClapTrap::new("HP-TEST");
        clap.take_damage(15);
        assert_eq!(clap.hit_points(), 0);

        clap.take_damage(u32::MAX);
        assert_eq!(clap.hit_points(), 0);
    }

    #[test]
    fn test_take_damage_exact_hit_points() {
        let mut clap = ClapTrap::new("EXACT");
        clap.take_damage(10);
        assert_eq!(clap.hit_points(), 0);
        assert!(!clap.is_alive());
    }

    #[test]
    fn test_take_damage_ignores_energy() {
        let mut clap = ClapTrap::new("DRAINED");
        for _ in 0..10 {
            clap.attack("target");
        }
        clap.take_damage(4);
        assert_eq!(clap.hit_points(), 6);
    }

    #[test]
    fn test_dead_unit_cannot_act() {
        let mut scav = ScavTrap::new("GUARDIAN");
        scav.take_damage(150);
        assert_eq!(scav.hit_points(), 0);

        assert!(scav.attack("intruder").is_rejection());
        assert!(scav.be_repaired(20).is_rejection());
        assert_eq!(scav.hit_points(), 0);
        assert_eq!(scav.energy_points(), 50);

        let guard = scav.guard_gate();
        assert!(!guard.is_rejection());
        assert_eq!(guard.event(), "guard_gate");
    }

    #[test]
    fn test_damage_then_repair() {
        let mut frag = FragTrap::new("FR4G-TP");
        frag.take_damage(30);
        frag.be_repaired(20);
        assert_eq!(frag.hit_points(), 90);
        assert_eq!(frag.energy_points(), 99);
    }

    #[test]
    fn test_repair_is_uncapped() {
        let mut clap = ClapTrap::new("OVERHEAL");
        for _ in 0..10 {
            clap.be_repaired(100);
        }
        assert_eq!(clap.hit_points(), 1010);
        assert_eq!(clap.energy_points(), 0);
    }

    #[test]
    fn test_repair_saturates_instead_of_wrapping() {
        let mut clap = ClapTrap::new("OVERFLOW");
        clap.be_repaired(u32::MAX);
        assert_eq!(clap.hit_points(), u32::MAX);
    }

    #[test]
    fn test_special_actions_are_free() {
        let scav = ScavTrap::new("SC4V-TP");
        let frag = FragTrap::new("FR4G-TP");
        let clap = ClapTrap::new("CLAP-01");

        assert_eq!(scav.special().map(|n| n.event()), Some("guard_gate"));
        assert_eq!(frag.high_fives_guys().event(), "high_fives");
        assert_eq!(clap.special(), None);

        assert_eq!(scav.snapshot(), UnitSnapshot::fresh(UnitKind::HeavyDefense, "SC4V-TP"));
        assert_eq!(frag.snapshot(), UnitSnapshot::fresh(UnitKind::HeavyOffense, "FR4G-TP"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = ClapTrap::new("ORIGINAL");
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.attack("target");
        original.take_damage(3);

        assert_eq!(original.energy_points(), 10);
        assert_eq!(original.hit_points(), 7);
        assert_eq!(copy.energy_points(), 9);
        assert_eq!(copy.hit_points(), 10);
    }

    #[test]
    fn test_clone_from_replaces_every_field() {
        let mut source = ScavTrap::new("GUARDIAN");
        source.attack("intruder");
        source.take_damage(42);

        let mut target = ScavTrap::new("ASSIGNED");
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.name(), "GUARDIAN");

        target.attack("another");
        assert_eq!(source.energy_points(), 49);
        assert_eq!(target.energy_points(), 48);
    }
}
