pub mod delays;
pub mod error;
pub mod manager;
pub mod scenario;
pub mod slot;
