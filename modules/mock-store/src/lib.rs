//! In-memory CRUD store backing mock REST endpoints.
//!
//! [`InMemoryEntityStore`] keeps a collection of [`Entity`] values behind a
//! lock, applies a caller-supplied filter and paginates the filtered result in
//! either counted ([`Page`]) or cursor ([`CursorPage`]) form.

pub mod entity;
pub mod error;
pub mod ids;
pub mod page;
pub mod store;

pub use entity::{Entity, Timestamps};
pub use error::StoreError;
pub use ids::{IdGenerator, SequentialIds};
pub use page::{CursorPage, ListRequest, Page, PageRequest};
pub use store::InMemoryEntityStore;
