//! Request/response model shared by every mock endpoint, and the scenario wrapper.

pub mod error_body;
pub mod request;
pub mod response;
pub mod wrapper;
