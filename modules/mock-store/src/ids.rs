use std::sync::atomic::{AtomicU64, Ordering};

/// Produces identifiers for newly created entities.
///
/// Any `Fn() -> Id` closure is a generator.
pub trait IdGenerator<Id>: Send + Sync {
    fn next_id(&self) -> Id;
}

impl<Id, F> IdGenerator<Id> for F
where
    F: Fn() -> Id + Send + Sync,
{
    fn next_id(&self) -> Id {
        self()
    }
}

/// Monotonic counter handing out `1, 2, 3, ...` (or from a chosen start).
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    fn advance(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator<u64> for SequentialIds {
    fn next_id(&self) -> u64 {
        self.advance()
    }
}

impl IdGenerator<String> for SequentialIds {
    fn next_id(&self) -> String {
        self.advance().to_string()
    }
}
