use thiserror::Error;

/// Errors returned by [`InMemoryEntityStore`](crate::InMemoryEntityStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Page size must be at least 1")]
    InvalidLimit,

    #[error("Id generator produced an id that is already in use: {0}")]
    IdCollision(String),
}

impl StoreError {
    pub fn id_collision(id: impl Into<String>) -> Self {
        Self::IdCollision(id.into())
    }
}
