//! Scenario slot backends.

pub mod file_slot;
pub mod in_memory_slot;
