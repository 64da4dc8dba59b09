//! Mock product and order endpoints for the admin UI.
//!
//! Every endpoint is wrapped with the scenario layer from `mock_scenarios`;
//! data comes from deterministic fixtures held in `mock_store` stores and can
//! be re-seeded at any time.

pub mod config;

pub mod api;
pub mod domain;

pub use api::rest::routes::{register_control_routes, register_routes};
pub use config::FixturesConfig;
pub use domain::error::DomainError;
pub use domain::order::{Order, OrderStatus};
pub use domain::product::{Product, ProductStatus};
pub use domain::service::AdminService;
