use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::Extension;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::{Stream, StreamExt as _};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use super::dto::{ScenarioChangeDto, ScenarioDto, ScenarioListDto, SetScenarioRequest};
use super::error::ApiError;
use crate::domain::error::ScenarioError;
use crate::domain::manager::ScenarioManager;

pub const SCENARIO_CHANGED_EVENT: &str = "scenario-changed";

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// `GET /__mock/v1/scenario`
pub async fn get_scenario(Extension(manager): Extension<Arc<ScenarioManager>>) -> Json<ScenarioDto> {
    Json(ScenarioDto {
        scenario: manager.current(),
    })
}

/// `PUT /__mock/v1/scenario`
///
/// # Errors
/// 400 for a malformed body or a name outside the scenario set; the current
/// scenario is left unchanged.
pub async fn set_scenario(
    Extension(manager): Extension<Arc<ScenarioManager>>,
    payload: Result<Json<SetScenarioRequest>, JsonRejection>,
) -> Result<Json<ScenarioChangeDto>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    match manager.set_named(&request.scenario) {
        Some(change) => Ok(Json(change.into())),
        None => Err(ScenarioError::unknown(request.scenario.trim()).into()),
    }
}

/// `DELETE /__mock/v1/scenario`
pub async fn reset_scenario(
    Extension(manager): Extension<Arc<ScenarioManager>>,
) -> Json<ScenarioChangeDto> {
    Json(manager.reset().into())
}

/// `GET /__mock/v1/scenarios`
pub async fn list_scenarios(
    Extension(manager): Extension<Arc<ScenarioManager>>,
) -> Json<ScenarioListDto> {
    Json(ScenarioListDto {
        scenarios: manager.list().to_vec(),
    })
}

/// `GET /__mock/v1/scenario/events`
///
/// Streams one `scenario-changed` event per change. Receivers that fall behind
/// skip the lagged events rather than disconnecting.
pub async fn scenario_events(
    Extension(manager): Extension<Arc<ScenarioManager>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(manager.events()).filter_map(|item| async move {
        match item {
            Ok(change) => Event::default()
                .event(SCENARIO_CHANGED_EVENT)
                .json_data(ScenarioChangeDto::from(change))
                .map_err(|e| tracing::warn!(error = %e, "Failed to encode scenario event"))
                .ok()
                .map(Ok),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Scenario event subscriber lagged");
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
}
