use serde::{Deserialize, Serialize};

/// Size of the generated datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixturesConfig {
    pub products: u32,
    pub orders: u32,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            products: 50,
            orders: 120,
        }
    }
}
