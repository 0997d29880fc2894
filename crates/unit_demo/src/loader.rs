//! Scenario file loading.

use std::path::Path;

use thiserror::Error;
use unit_core::scenario::ScenarioData;

/// Error type for scenario loading.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

/// Load a scenario from a RON file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioData, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    let scenario: ScenarioData = ron::from_str(&contents)?;
    tracing::debug!(
        path = %path.display(),
        steps = scenario.steps.len(),
        "Loaded scenario"
    );
    Ok(scenario)
}
