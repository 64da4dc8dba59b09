use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers;
use crate::domain::manager::ScenarioManager;

pub const SCENARIO_PATH: &str = "/__mock/v1/scenario";
pub const SCENARIOS_PATH: &str = "/__mock/v1/scenarios";
pub const SCENARIO_EVENTS_PATH: &str = "/__mock/v1/scenario/events";

/// Mounts the scenario control surface onto `router`.
pub fn register_routes(router: Router, manager: Arc<ScenarioManager>) -> Router {
    let control = Router::new()
        .route(
            SCENARIO_PATH,
            get(handlers::get_scenario)
                .put(handlers::set_scenario)
                .delete(handlers::reset_scenario),
        )
        .route(SCENARIOS_PATH, get(handlers::list_scenarios))
        .route(SCENARIO_EVENTS_PATH, get(handlers::scenario_events))
        .layer(Extension(manager));

    router.merge(control)
}
