use parking_lot::Mutex;

use crate::domain::error::SlotError;
use crate::domain::slot::ScenarioSlot;

/// Process-local slot, shared between manager instances to emulate a reload.
#[derive(Debug, Default)]
pub struct InMemoryScenarioSlot {
    value: Mutex<Option<String>>,
}

impl ScenarioSlot for InMemoryScenarioSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.value.lock().clone())
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        *self.value.lock() = Some(value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SlotError> {
        *self.value.lock() = None;
        Ok(())
    }
}
