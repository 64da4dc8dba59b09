use std::fmt;
use std::str::FromStr;

use mock_store::{Entity, Timestamps};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown order status: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub total: f64,
    pub item_count: u32,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub total: f64,
    pub item_count: u32,
}

/// Orders only ever change status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
}

impl Entity for Order {
    type Id = String;
    type Draft = OrderDraft;
    type Patch = OrderPatch;

    fn id(&self) -> &String {
        &self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    fn from_draft(id: String, timestamps: Timestamps, draft: OrderDraft) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            status: draft.status,
            total: draft.total,
            item_count: draft.item_count,
            timestamps,
        }
    }

    fn apply_patch(&mut self, patch: OrderPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Applies `filter` (customer name or email search, status) and orders the
/// matches newest first.
pub fn filter_orders(orders: Vec<Order>, filter: &OrderFilter) -> Vec<Order> {
    let needle = filter.search.as_deref().map(str::to_lowercase);
    let mut matching: Vec<Order> = orders
        .into_iter()
        .filter(|o| {
            needle.as_deref().is_none_or(|needle| {
                o.customer_name.to_lowercase().contains(needle)
                    || o.customer_email.to_lowercase().contains(needle)
            }) && filter.status.is_none_or(|s| o.status == s)
        })
        .collect();
    matching.sort_by(|a, b| {
        b.timestamps
            .created_at
            .cmp(&a.timestamps.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    matching
}
