//! Scenario-driven mock layer.
//!
//! A [`ScenarioManager`] holds the single active [`Scenario`] for the process and
//! persists it to a [`ScenarioSlot`]. Mock endpoints implement [`MockHandler`] for
//! their happy path and are wrapped with [`with_scenarios`], which emulates every
//! failure mode (server error, rate limit, validation error, network failure, slow
//! backend) in one place.

pub mod config;
pub mod duration_serde;

pub mod api;
pub mod domain;
pub mod infra;
pub mod mock;

pub use config::ScenarioConfig;
pub use domain::delays::ScenarioDelays;
pub use domain::error::{ScenarioError, SlotError};
pub use domain::manager::{ScenarioChanged, ScenarioManager, Subscription};
pub use domain::scenario::Scenario;
pub use domain::slot::{NoopScenarioSlot, ScenarioSlot};
pub use infra::storage::file_slot::FileScenarioSlot;
pub use infra::storage::in_memory_slot::InMemoryScenarioSlot;
pub use mock::error_body::{ErrorBody, ErrorDetail, FieldErrors, codes};
pub use mock::request::MockRequest;
pub use mock::response::MockResponse;
pub use mock::wrapper::{MockHandler, ScenarioHandler, ScenarioWrapper, with_scenarios};
