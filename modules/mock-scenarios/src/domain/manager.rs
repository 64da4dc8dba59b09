//! Process-wide holder of the active mock scenario.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tokio::sync::broadcast;

use super::scenario::Scenario;
use super::slot::{NoopScenarioSlot, ScenarioSlot};

/// Default capacity of the change-event channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Notification emitted on every `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioChanged {
    pub scenario: Scenario,
    pub previous: Scenario,
}

type Listener = Arc<dyn Fn(ScenarioChanged) + Send + Sync>;

#[derive(Debug, Clone, Copy)]
struct Active {
    scenario: Scenario,
    /// The value is backed by the durable slot; losing it there means it was reset.
    in_slot: bool,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Holds and broadcasts the single active scenario.
///
/// The in-memory value is mirrored into a [`ScenarioSlot`] so that a freshly
/// started process (or an external tool editing the slot) sees the same scenario.
/// Listeners registered with [`subscribe`](Self::subscribe) run synchronously on
/// every `set`, in registration order; [`events`](Self::events) exposes the same
/// changes as a broadcast channel for observers that cannot register a callback.
///
/// When a durable slot loses its value (another process reset it, or a tool
/// deleted it), the manager falls back to its `initial` scenario.
pub struct ScenarioManager {
    current: RwLock<Active>,
    initial: Scenario,
    slot: Arc<dyn ScenarioSlot>,
    listeners: Arc<Mutex<Listeners>>,
    events: broadcast::Sender<ScenarioChanged>,
}

impl ScenarioManager {
    /// Creates a manager backed by `slot`, starting at `initial` until the slot says otherwise.
    #[must_use]
    pub fn new(slot: Arc<dyn ScenarioSlot>, initial: Scenario, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));
        Self {
            current: RwLock::new(Active {
                scenario: initial,
                in_slot: false,
            }),
            initial,
            slot,
            listeners: Arc::new(Mutex::new(Listeners::default())),
            events,
        }
    }

    /// Creates a manager without durable storage, starting at `success`.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(NoopScenarioSlot),
            Scenario::Success,
            DEFAULT_EVENT_CAPACITY,
        )
    }

    /// Makes `scenario` current, persists it and notifies every observer.
    pub fn set(&self, scenario: Scenario) -> ScenarioChanged {
        self.sync_from_slot();

        let in_slot = match self.slot.write(scenario.as_str()) {
            Ok(()) => self.slot.is_durable(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist scenario, keeping it in memory only");
                false
            }
        };
        let previous = std::mem::replace(&mut *self.current.write(), Active { scenario, in_slot })
            .scenario;

        let change = ScenarioChanged { scenario, previous };
        tracing::info!(%scenario, %previous, "Mock scenario changed");
        self.notify(change);
        change
    }

    /// Sets the scenario by wire name.
    ///
    /// An unknown name is rejected with a warning and leaves the current scenario
    /// unchanged; this never fails, since callers are often ad hoc scripts.
    pub fn set_named(&self, name: &str) -> Option<ScenarioChanged> {
        match name.parse::<Scenario>() {
            Ok(scenario) => Some(self.set(scenario)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    current = %self.current(),
                    "Ignoring unknown scenario; current scenario unchanged"
                );
                None
            }
        }
    }

    /// Returns the active scenario, adopting a valid value persisted in the slot.
    #[must_use]
    pub fn current(&self) -> Scenario {
        self.sync_from_slot()
    }

    /// Goes back to `success` and erases the persisted value.
    pub fn reset(&self) -> ScenarioChanged {
        let change = self.set(Scenario::Success);
        match self.slot.clear() {
            Ok(()) => self.current.write().in_slot = false,
            Err(e) => tracing::warn!(error = %e, "Failed to clear persisted scenario"),
        }
        change
    }

    /// All legal scenarios, in declared order.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn list(&self) -> &'static [Scenario] {
        &Scenario::ALL
    }

    /// Registers a listener invoked synchronously on every `set`.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ScenarioChanged) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// New receiver for change events.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<ScenarioChanged> {
        self.events.subscribe()
    }

    fn sync_from_slot(&self) -> Scenario {
        match self.slot.read() {
            Ok(Some(raw)) => match raw.parse::<Scenario>() {
                Ok(persisted) => {
                    *self.current.write() = Active {
                        scenario: persisted,
                        in_slot: true,
                    };
                    persisted
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring invalid persisted scenario");
                    self.current.read().scenario
                }
            },
            Ok(None) => {
                let mut active = self.current.write();
                if active.in_slot {
                    tracing::info!(
                        previous = %active.scenario,
                        initial = %self.initial,
                        "Persisted scenario removed, falling back to initial scenario"
                    );
                    *active = Active {
                        scenario: self.initial,
                        in_slot: false,
                    };
                }
                active.scenario
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted scenario");
                self.current.read().scenario
            }
        }
    }

    fn notify(&self, change: ScenarioChanged) {
        // Snapshot so listeners may subscribe or unsubscribe re-entrantly.
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(change);
        }

        if self.events.send(change).is_err() {
            tracing::trace!("No scenario event receivers");
        }
    }
}

/// Handle returned by [`ScenarioManager::subscribe`].
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Removes the listener.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
