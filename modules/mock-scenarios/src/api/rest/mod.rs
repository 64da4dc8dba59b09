pub mod adapter;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use adapter::endpoint;
pub use error::ApiError;
pub use routes::register_routes;
