//! Durable key-value slot holding the persisted scenario name.

use super::error::SlotError;

/// Storage for the single persisted scenario name.
///
/// The stored value is a raw string: external tools may write anything into the
/// slot, so readers validate it before use.
pub trait ScenarioSlot: Send + Sync {
    /// Returns the stored value, or `None` when the slot is absent.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn read(&self) -> Result<Option<String>, SlotError>;

    /// Stores `value`, replacing any previous content.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn write(&self, value: &str) -> Result<(), SlotError>;

    /// Erases the slot entirely.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be cleared.
    fn clear(&self) -> Result<(), SlotError>;

    /// Whether values written here are visible to other readers of the slot.
    ///
    /// For a durable slot an absent value means the key was removed, not that
    /// nothing was ever stored.
    fn is_durable(&self) -> bool {
        true
    }
}

/// Slot for hosts without durable storage; the manager stays purely in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScenarioSlot;

impl ScenarioSlot for NoopScenarioSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(None)
    }

    fn write(&self, _value: &str) -> Result<(), SlotError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), SlotError> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}
