//! The closed set of canned backend behaviours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ScenarioError;

/// A named canned backend behaviour selected for mock responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Normal responses after a short simulated latency.
    #[default]
    Success,
    /// Handlers return empty data sets.
    Empty,
    /// Normal responses after a long simulated latency.
    LoadingSlow,
    /// 429 with a retry hint.
    RateLimit,
    /// 500 with an internal error body.
    ServerError,
    /// 422 with field-level messages.
    ValidationError,
    /// Transport failure, no status code.
    NetworkError,
}

impl Scenario {
    /// Every legal scenario, in declared order.
    pub const ALL: [Scenario; 7] = [
        Scenario::Success,
        Scenario::Empty,
        Scenario::LoadingSlow,
        Scenario::RateLimit,
        Scenario::ServerError,
        Scenario::ValidationError,
        Scenario::NetworkError,
    ];

    /// Wire name of the scenario.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scenario::Success => "success",
            Scenario::Empty => "empty",
            Scenario::LoadingSlow => "loading-slow",
            Scenario::RateLimit => "rate-limit",
            Scenario::ServerError => "server-error",
            Scenario::ValidationError => "validation-error",
            Scenario::NetworkError => "network-error",
        }
    }

    /// Whether the wrapper short-circuits this scenario without calling the handler.
    #[must_use]
    pub const fn short_circuits(self) -> bool {
        matches!(
            self,
            Scenario::RateLimit
                | Scenario::ServerError
                | Scenario::ValidationError
                | Scenario::NetworkError
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == name)
            .ok_or_else(|| ScenarioError::unknown(name))
    }
}
