use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated latencies applied by the scenario wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioDelays {
    /// Wait before answering `server-error`.
    #[serde(with = "crate::duration_serde")]
    pub server_error: Duration,
    /// Wait before answering `validation-error`.
    #[serde(with = "crate::duration_serde")]
    pub validation_error: Duration,
    /// Wait before delegating under `loading-slow`.
    #[serde(with = "crate::duration_serde")]
    pub loading_slow: Duration,
    /// Wait before delegating under every other scenario.
    #[serde(with = "crate::duration_serde")]
    pub default: Duration,
}

impl Default for ScenarioDelays {
    fn default() -> Self {
        Self {
            server_error: Duration::from_millis(500),
            validation_error: Duration::from_millis(200),
            loading_slow: Duration::from_secs(3),
            default: Duration::from_millis(300),
        }
    }
}

impl ScenarioDelays {
    /// No simulated latency at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            server_error: Duration::ZERO,
            validation_error: Duration::ZERO,
            loading_slow: Duration::ZERO,
            default: Duration::ZERO,
        }
    }
}
