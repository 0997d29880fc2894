//! # Unit Core
//!
//! Combat unit model: three unit variants sharing one state shape, with
//! bounded resources and a fixed set of actions.
//!
//! This crate contains **only** synchronous value logic:
//! - No file IO
//! - No threads or async
//! - No randomness
//!
//! Every lifecycle event and action outcome is narrated through `tracing`
//! (see [`narration`]), so callers can observe what happened without any
//! operation ever returning an error.
//!
//! ## Crate Structure
//!
//! - [`variant`] - Unit kinds, resource profiles and the `Variant` marker types
//! - [`unit`] - The `Unit` entity and its actions
//! - [`narration`] - Narration events and their tracing output
//! - [`roster`] - Type-erased units stored by slot name
//! - [`scenario`] - RON-scripted action sequences run against a roster

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod narration;
pub mod roster;
pub mod scenario;
pub mod unit;
pub mod variant;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Result, UnitError};
    pub use crate::narration::{Narration, Origin};
    pub use crate::roster::{AnyUnit, Roster};
    pub use crate::scenario::{ScenarioData, ScenarioReport, Step};
    pub use crate::unit::{ClapTrap, FragTrap, ScavTrap, Unit, UnitSnapshot};
    pub use crate::variant::{
        Base, HeavyDefense, HeavyOffense, SpecialAction, UnitKind, UnitProfile, Variant,
    };
}
