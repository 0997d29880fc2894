//! Built-in demonstration scenarios, embedded at compile time.

use unit_core::error::Result;
use unit_core::scenario::ScenarioData;

/// Name, one-line summary and RON source of every built-in scenario.
pub const BUILTIN_SCENARIOS: [(&str, &str, &str); 3] = [
    (
        "base",
        "Base units: exhaustion, copy and assignment",
        include_str!("../scenarios/base.ron"),
    ),
    (
        "defense",
        "Heavy-Defense units: guard mode and scoped disposal",
        include_str!("../scenarios/defense.ron"),
    ),
    (
        "offense",
        "Heavy-Offense units: high fives after exhaustion",
        include_str!("../scenarios/offense.ron"),
    ),
];

/// Names of the built-in scenarios.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_SCENARIOS.iter().map(|(name, _, _)| *name)
}

/// Parse the built-in scenario called `name`, if there is one.
pub fn find(name: &str) -> Option<Result<ScenarioData>> {
    BUILTIN_SCENARIOS
        .iter()
        .find(|(builtin, _, _)| *builtin == name)
        .map(|(_, _, source)| ScenarioData::from_ron_str(source))
}
