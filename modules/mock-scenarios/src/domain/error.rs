//! Error types for scenario selection and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when interpreting a scenario name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The name is not one of the known scenarios.
    #[error("Unknown scenario: {0}")]
    Unknown(String),
}

impl ScenarioError {
    /// Creates an `Unknown` error.
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown(name.into())
    }
}

/// Errors raised by a [`ScenarioSlot`](super::slot::ScenarioSlot) backend.
#[derive(Error, Debug)]
pub enum SlotError {
    /// Reading, writing or removing the slot file failed.
    #[error("Scenario slot I/O failed at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
