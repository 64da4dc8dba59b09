use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::delays::ScenarioDelays;
use crate::domain::manager::{DEFAULT_EVENT_CAPACITY, ScenarioManager};
use crate::domain::scenario::Scenario;
use crate::domain::slot::{NoopScenarioSlot, ScenarioSlot};
use crate::infra::storage::file_slot::FileScenarioSlot;

/// Scenario layer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Scenario used until one is set or found in the slot.
    pub initial: Scenario,
    /// Persist the active scenario to `slot_file`.
    pub persist: bool,
    /// Slot file; relative paths resolve against the server home directory.
    pub slot_file: PathBuf,
    /// Buffered change events per subscriber.
    pub event_capacity: usize,
    pub delays: ScenarioDelays,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            initial: Scenario::Success,
            persist: true,
            slot_file: PathBuf::from("scenario"),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            delays: ScenarioDelays::default(),
        }
    }
}

impl ScenarioConfig {
    /// Absolute slot path, or `None` when persistence is disabled.
    #[must_use]
    pub fn slot_path(&self, home_dir: &Path) -> Option<PathBuf> {
        if !self.persist {
            return None;
        }
        if self.slot_file.is_absolute() {
            Some(self.slot_file.clone())
        } else {
            Some(home_dir.join(&self.slot_file))
        }
    }

    /// Builds the manager described by this configuration.
    #[must_use]
    pub fn build_manager(&self, home_dir: &Path) -> ScenarioManager {
        let slot: Arc<dyn ScenarioSlot> = match self.slot_path(home_dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using file scenario slot");
                Arc::new(FileScenarioSlot::new(path))
            }
            None => Arc::new(NoopScenarioSlot),
        };
        ScenarioManager::new(slot, self.initial, self.event_capacity)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn defaults_persist_to_home_relative_file() {
        let config = ScenarioConfig::default();
        assert_eq!(
            config.slot_path(Path::new("/srv/mock")),
            Some(PathBuf::from("/srv/mock/scenario"))
        );
    }

    #[test]
    fn absolute_slot_file_is_kept() {
        let config = ScenarioConfig {
            slot_file: PathBuf::from("/tmp/mock-scenario"),
            ..ScenarioConfig::default()
        };
        assert_eq!(
            config.slot_path(Path::new("/srv/mock")),
            Some(PathBuf::from("/tmp/mock-scenario"))
        );
    }

    #[test]
    fn persistence_can_be_disabled() {
        let config = ScenarioConfig {
            persist: false,
            ..ScenarioConfig::default()
        };
        assert_eq!(config.slot_path(Path::new("/srv/mock")), None);
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let config: ScenarioConfig = serde_json::from_value(serde_json::json!({
            "initial": "empty",
            "delays": { "loading_slow": "5s" }
        }))
        .unwrap();

        assert_eq!(config.initial, Scenario::Empty);
        assert!(config.persist);
        assert_eq!(config.delays.loading_slow, Duration::from_secs(5));
        assert_eq!(config.delays.default, Duration::from_millis(300));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ScenarioConfig, _> =
            serde_json::from_value(serde_json::json!({ "defualt": "empty" }));
        assert!(result.is_err());
    }

    #[test]
    fn built_manager_shares_state_through_slot_file() {
        let home = TempDir::new().unwrap();
        let config = ScenarioConfig::default();

        config.build_manager(home.path()).set(Scenario::RateLimit);

        let other = config.build_manager(home.path());
        assert_eq!(other.current(), Scenario::RateLimit);
        assert_eq!(
            std::fs::read_to_string(home.path().join("scenario")).unwrap(),
            "rate-limit"
        );
    }

    #[test]
    fn running_manager_follows_reset_through_slot_file() {
        let home = TempDir::new().unwrap();
        let config = ScenarioConfig::default();
        let server = config.build_manager(home.path());
        let cli = config.build_manager(home.path());

        cli.set_named("rate-limit").unwrap();
        assert_eq!(server.current(), Scenario::RateLimit);

        cli.reset();
        assert!(!home.path().join("scenario").exists());
        assert_eq!(server.current(), Scenario::Success);
    }

    #[test]
    fn running_manager_follows_deleted_slot_file() {
        let home = TempDir::new().unwrap();
        let config = ScenarioConfig {
            initial: Scenario::Empty,
            ..ScenarioConfig::default()
        };
        let server = config.build_manager(home.path());

        std::fs::write(home.path().join("scenario"), "server-error").unwrap();
        assert_eq!(server.current(), Scenario::ServerError);

        std::fs::remove_file(home.path().join("scenario")).unwrap();
        assert_eq!(server.current(), Scenario::Empty);
    }
}
