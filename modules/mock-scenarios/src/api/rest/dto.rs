//! REST DTOs for the scenario control surface.

use serde::{Deserialize, Serialize};

use crate::domain::manager::ScenarioChanged;
use crate::domain::scenario::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDto {
    pub scenario: Scenario,
}

/// Body of `PUT /__mock/v1/scenario`.
///
/// The name stays a plain string so an unknown value can be reported with the
/// standard error body instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SetScenarioRequest {
    pub scenario: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioChangeDto {
    pub scenario: Scenario,
    pub previous: Scenario,
}

impl From<ScenarioChanged> for ScenarioChangeDto {
    fn from(change: ScenarioChanged) -> Self {
        Self {
            scenario: change.scenario,
            previous: change.previous,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioListDto {
    pub scenarios: Vec<Scenario>,
}
