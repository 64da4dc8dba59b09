pub mod error;
pub mod fixtures;
pub mod order;
pub mod product;
pub mod service;
