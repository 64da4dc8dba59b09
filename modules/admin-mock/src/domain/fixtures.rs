//! Deterministic datasets. The same count always yields the same entities.

use chrono::{DateTime, TimeDelta, Utc};
use mock_store::{Entity, Timestamps};

use super::order::{Order, OrderDraft, OrderStatus};
use super::product::{Product, ProductDraft, ProductStatus};

/// 2024-01-01T00:00:00Z
const EPOCH_SECS: i64 = 1_704_067_200;

const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Home", "Books", "Sports"];
const ADJECTIVES: [&str; 8] = [
    "Classic", "Premium", "Compact", "Deluxe", "Eco", "Smart", "Vintage", "Ultra",
];
const NOUNS: [&str; 10] = [
    "Headphones",
    "Jacket",
    "Lamp",
    "Notebook",
    "Water Bottle",
    "Backpack",
    "Keyboard",
    "Mug",
    "Sneakers",
    "Speaker",
];
const FIRST_NAMES: [&str; 10] = [
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Mia", "Lucas",
];
const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Brown", "Garcia", "Miller", "Davis", "Wilson", "Taylor",
];

fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(EPOCH_SECS, 0).unwrap_or_default()
}

fn pick<'a>(items: &[&'a str], n: u32) -> &'a str {
    let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
    usize::try_from(n % len)
        .ok()
        .and_then(|i| items.get(i))
        .copied()
        .unwrap_or_default()
}

/// Products with ids `"1"..="count"`.
#[must_use]
pub fn products(count: u32) -> Vec<Product> {
    (1..=count).map(product).collect()
}

fn product(n: u32) -> Product {
    let adjective = pick(&ADJECTIVES, n);
    let noun = pick(&NOUNS, n.wrapping_mul(3));
    let category = pick(&CATEGORIES, n);

    let status = if n % 10 == 0 {
        ProductStatus::Archived
    } else if n % 7 == 0 {
        ProductStatus::Draft
    } else {
        ProductStatus::Active
    };
    let cents = (n.wrapping_mul(3_719) % 49_000) + 999;

    let created_at = epoch() + TimeDelta::days(i64::from(n));
    let mut timestamps = Timestamps::at(created_at);
    timestamps.touch(created_at + TimeDelta::hours(i64::from(n % 24)));

    Product::from_draft(
        n.to_string(),
        timestamps,
        ProductDraft {
            name: format!("{adjective} {noun}"),
            description: format!("{adjective} {} for everyday use", noun.to_lowercase()),
            category: category.to_owned(),
            price: f64::from(cents) / 100.0,
            stock: n.wrapping_mul(13) % 150,
            status,
        },
    )
}

/// Orders with ids `"1"..="count"`, one every three hours from the epoch.
#[must_use]
pub fn orders(count: u32) -> Vec<Order> {
    (1..=count).map(order).collect()
}

fn order(n: u32) -> Order {
    let first = pick(&FIRST_NAMES, n);
    let last = pick(&LAST_NAMES, n.wrapping_mul(7));
    let status = OrderStatus::ALL
        .get(usize::try_from(n % 5).unwrap_or_default())
        .copied()
        .unwrap_or_default();
    let item_count = n % 5 + 1;
    let unit_cents = (n.wrapping_mul(5_303) % 20_000) + 950;

    let created_at = epoch() + TimeDelta::hours(3 * i64::from(n));
    let mut timestamps = Timestamps::at(created_at);
    if status != OrderStatus::Pending {
        timestamps.touch(created_at + TimeDelta::hours(1));
    }

    Order::from_draft(
        n.to_string(),
        timestamps,
        OrderDraft {
            customer_name: format!("{first} {last}"),
            customer_email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            status,
            total: f64::from(unit_cents) * f64::from(item_count) / 100.0,
            item_count,
        },
    )
}
