//! Scripted action sequences.
//!
//! A [`ScenarioData`] is a named list of [`Step`]s, usually deserialized from
//! RON. Running it builds a fresh [`Roster`], applies each step in order and
//! reports the action narrations plus the state of every unit left standing.
//!
//! **Note:** This module contains no IO - loading files is handled by the
//! `unit_demo` crate.
//!
//! # Example RON
//!
//! ```ron
//! ScenarioData(
//!     name: "exhaustion",
//!     description: "Spend every energy point, then try once more",
//!     steps: [
//!         Spawn(slot: "clap", kind: Base, name: Some("ENERGY-TEST")),
//!         Repeat(times: 11, step: Attack(slot: "clap", target: "target")),
//!         Repair(slot: "clap", amount: 1),
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitError};
use crate::narration::Narration;
use crate::roster::Roster;
use crate::unit::UnitSnapshot;
use crate::variant::UnitKind;

/// Most steps a single scenario may execute, counting every repetition.
pub const MAX_SCENARIO_STEPS: u64 = 1_000_000;

/// One scripted instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Print a banner line.
    Section {
        /// Banner text.
        title: String,
    },
    /// Construct a unit into a new slot.
    Spawn {
        /// Slot to fill.
        slot: String,
        /// Variant to construct.
        kind: UnitKind,
        /// Name, or `None` for the default name.
        #[serde(default)]
        name: Option<String>,
    },
    /// Copy-construct `from` into the new slot `to`.
    Copy {
        /// Source slot.
        from: String,
        /// Slot to fill.
        to: String,
    },
    /// Copy-assign `from` onto the existing unit in `to`.
    Assign {
        /// Source slot.
        from: String,
        /// Destination slot.
        to: String,
    },
    /// Attack a named target.
    Attack {
        /// Attacker slot.
        slot: String,
        /// Target name.
        target: String,
    },
    /// Apply damage.
    TakeDamage {
        /// Slot to damage.
        slot: String,
        /// Damage amount.
        amount: u32,
    },
    /// Repair.
    Repair {
        /// Slot to repair.
        slot: String,
        /// Hit points to restore.
        amount: u32,
    },
    /// Perform the variant's extra action.
    Special {
        /// Slot acting.
        slot: String,
    },
    /// Run `step` `times` times. Nested repeats multiply.
    Repeat {
        /// Repetition count.
        times: u32,
        /// Step to repeat.
        step: Box<Step>,
    },
    /// Dispose of a unit before the scenario ends.
    Dispose {
        /// Slot to empty.
        slot: String,
    },
}

impl Step {
    /// Number of steps this expands to once every `Repeat` is unrolled.
    #[must_use]
    pub fn cost(&self) -> u64 {
        match self {
            Self::Repeat { times, step } => u64::from(*times).saturating_mul(step.cost()),
            _ => 1,
        }
    }
}

/// A named, scripted scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioData {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Steps, in execution order.
    pub steps: Vec<Step>,
}

/// Outcome of running a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: String,
    /// Narration of every action step, in order.
    pub narrations: Vec<Narration>,
    /// State of each unit still alive in the roster when the steps ran out.
    pub survivors: Vec<(String, UnitSnapshot)>,
}

impl ScenarioReport {
    /// Number of actions refused by the eligibility gate.
    #[must_use]
    pub fn rejections(&self) -> usize {
        self.narrations.iter().filter(|n| n.is_rejection()).count()
    }

    /// Final state of the unit in `slot`, if it survived to the end.
    #[must_use]
    pub fn survivor(&self, slot: &str) -> Option<&UnitSnapshot> {
        self.survivors
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, snapshot)| snapshot)
    }
}

impl ScenarioData {
    /// Parse a scenario from RON text.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        Ok(ron::from_str(ron)?)
    }

    /// Total steps executed once every `Repeat` is unrolled.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |total, step| total.saturating_add(step.cost()))
    }

    /// Run every step against a fresh roster.
    ///
    /// Scenarios expanding to more than [`MAX_SCENARIO_STEPS`] are refused
    /// before any unit is built. Units left in the roster are disposed,
    /// newest first, before this returns.
    pub fn run(&self) -> Result<ScenarioReport> {
        let span = tracing::info_span!("scenario", name = %self.name);
        let _enter = span.enter();

        let steps = self.step_count();
        if steps > MAX_SCENARIO_STEPS {
            return Err(UnitError::StepLimitExceeded {
                steps,
                limit: MAX_SCENARIO_STEPS,
            });
        }

        let mut roster = Roster::new();
        let mut report = ScenarioReport {
            name: self.name.clone(),
            ..ScenarioReport::default()
        };

        for step in &self.steps {
            apply_step(&mut roster, step, &mut report.narrations)?;
        }

        report.survivors = roster.snapshots();
        tracing::info!(
            steps = self.steps.len(),
            survivors = report.survivors.len(),
            "scenario finished"
        );
        Ok(report)
    }
}

fn apply_step(roster: &mut Roster, step: &Step, narrations: &mut Vec<Narration>) -> Result<()> {
    match step {
        Step::Section { title } => tracing::info!("=== {title} ==="),
        Step::Spawn { slot, kind, name } => roster.spawn(slot, *kind, name.as_deref())?,
        Step::Copy { from, to } => roster.copy_into(from, to)?,
        Step::Assign { from, to } => roster.assign(from, to)?,
        Step::Attack { slot, target } => {
            narrations.push(roster.get_mut(slot)?.attack(target));
        }
        Step::TakeDamage { slot, amount } => {
            narrations.push(roster.get_mut(slot)?.take_damage(*amount));
        }
        Step::Repair { slot, amount } => {
            narrations.push(roster.get_mut(slot)?.be_repaired(*amount));
        }
        Step::Special { slot } => {
            let unit = roster.get(slot)?;
            let narration = unit.special().ok_or_else(|| UnitError::UnsupportedAction {
                slot: slot.clone(),
                kind: unit.kind(),
            })?;
            narrations.push(narration);
        }
        Step::Repeat { times, step } => {
            for _ in 0..*times {
                apply_step(roster, step, narrations)?;
            }
        }
        Step::Dispose { slot } => drop(roster.remove(slot)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXHAUSTION: &str = r#"
        ScenarioData(
            name: "exhaustion",
            description: "Spend every energy point, then try once more",
            steps: [
                Spawn(slot: "clap", kind: Base, name: Some("ENERGY-TEST")),
                Repeat(times: 11, step: Attack(slot: "clap", target: "target")),
                Repair(slot: "clap", amount: 1),
            ],
        )
    "#;

    #[test]
    fn test_parse_and_run() {
        let scenario = ScenarioData::from_ron_str(EXHAUSTION).unwrap();
        assert_eq!(scenario.steps.len(), 3);

        let report = scenario.run().unwrap();
        assert_eq!(report.narrations.len(), 12);
        assert_eq!(report.rejections(), 2);

        let clap = report.survivor("clap").unwrap();
        assert_eq!(clap.energy_points, 0);
        assert_eq!(clap.hit_points, 10);
    }

    #[test]
    fn test_spawn_name_defaults() {
        let scenario = ScenarioData::from_ron_str(
            r#"ScenarioData(name: "n", steps: [Spawn(slot: "s", kind: HeavyDefense)])"#,
        )
        .unwrap();
        let report = scenario.run().unwrap();
        assert_eq!(report.survivor("s").unwrap().name, "Default");
        assert!(scenario.description.is_empty());
    }

    #[test]
    fn test_special_on_base_fails() {
        let scenario = ScenarioData {
            name: "bad".to_string(),
            description: String::new(),
            steps: vec![
                Step::Spawn {
                    slot: "c".to_string(),
                    kind: UnitKind::Base,
                    name: None,
                },
                Step::Special {
                    slot: "c".to_string(),
                },
            ],
        };
        let err = scenario.run().unwrap_err();
        assert!(matches!(err, UnitError::UnsupportedAction { kind: UnitKind::Base, .. }));
    }

    #[test]
    fn test_dispose_removes_survivor() {
        let scenario = ScenarioData {
            name: "scoped".to_string(),
            description: String::new(),
            steps: vec![
                Step::Spawn {
                    slot: "a".to_string(),
                    kind: UnitKind::HeavyOffense,
                    name: Some("A".to_string()),
                },
                Step::Spawn {
                    slot: "b".to_string(),
                    kind: UnitKind::HeavyOffense,
                    name: Some("B".to_string()),
                },
                Step::Dispose {
                    slot: "a".to_string(),
                },
            ],
        };
        let report = scenario.run().unwrap();
        assert!(report.survivor("a").is_none());
        assert!(report.survivor("b").is_some());
    }

    #[test]
    fn test_unknown_slot_reported() {
        let scenario = ScenarioData::from_ron_str(
            r#"ScenarioData(name: "n", steps: [TakeDamage(slot: "ghost", amount: 1)])"#,
        )
        .unwrap();
        assert!(matches!(scenario.run(), Err(UnitError::UnknownSlot(_))));
    }

    #[test]
    fn test_nested_repeat_refused_before_running() {
        let scenario = ScenarioData::from_ron_str(
            r#"ScenarioData(
                name: "forever",
                steps: [
                    Spawn(slot: "c", kind: Base),
                    Repeat(
                        times: 4294967295,
                        step: Repeat(
                            times: 4294967295,
                            step: Attack(slot: "c", target: "t"),
                        ),
                    ),
                ],
            )"#,
        )
        .unwrap();

        let err = scenario.run().unwrap_err();
        assert!(matches!(
            err,
            UnitError::StepLimitExceeded {
                limit: MAX_SCENARIO_STEPS,
                ..
            }
        ));
    }

    #[test]
    fn test_step_count_unrolls_repeats() {
        let scenario = ScenarioData::from_ron_str(EXHAUSTION).unwrap();
        assert_eq!(scenario.step_count(), 13);

        let at_limit = ScenarioData {
            name: "limit".to_string(),
            description: String::new(),
            steps: vec![Step::Repeat {
                times: 1000,
                step: Box::new(Step::Repeat {
                    times: 1000,
                    step: Box::new(Step::Section {
                        title: "tick".to_string(),
                    }),
                }),
            }],
        };
        assert_eq!(at_limit.step_count(), MAX_SCENARIO_STEPS);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ScenarioData::from_ron_str("ScenarioData(name: 3)"),
            Err(UnitError::ScenarioParse(_))
        ));
    }
}
