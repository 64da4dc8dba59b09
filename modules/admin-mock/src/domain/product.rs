use std::fmt;
use std::str::FromStr;

use mock_scenarios::FieldErrors;
use mock_store::{Entity, Timestamps};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "draft" => Ok(Self::Draft),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::invalid_input(format!(
                "unknown product status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Validated creation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

/// Partial update; absent fields are left untouched. `id` and timestamps in the
/// payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl ProductPatch {
    /// # Errors
    /// [`DomainError::Validation`] when a supplied field is blank or out of range.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = FieldErrors::default();
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            errors.add("name", "Name must not be empty");
        }
        if let Some(price) = self.price {
            check_price(price, &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

pub(crate) fn check_price(price: f64, errors: &mut FieldErrors) {
    if !price.is_finite() || price <= 0.0 {
        errors.add("price", "Price must be a positive number");
    }
}

impl Entity for Product {
    type Id = String;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> &String {
        &self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    fn from_draft(id: String, timestamps: Timestamps, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            status: draft.status,
            timestamps,
        }
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Product list criteria. `None` fields do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        let search_ok = needle.is_none_or(|needle| {
            product.name.to_lowercase().contains(needle)
                || product.description.to_lowercase().contains(needle)
        });
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category.eq_ignore_ascii_case(c));
        let status_ok = self.status.is_none_or(|s| product.status == s);
        let price_ok = self.max_price.is_none_or(|max| product.price <= max);

        search_ok && category_ok && status_ok && price_ok
    }
}

/// Applies `filter` and orders the matches by numeric id.
pub fn filter_products(products: Vec<Product>, filter: &ProductFilter) -> Vec<Product> {
    let needle = filter.search.as_deref().map(str::to_lowercase);
    let mut matching: Vec<Product> = products
        .into_iter()
        .filter(|p| filter.matches(p, needle.as_deref()))
        .collect();
    matching.sort_by_key(|p| p.id.parse::<u64>().unwrap_or(u64::MAX));
    matching
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn product(id: &str, name: &str, category: &str, price: f64, status: ProductStatus) -> Product {
        Product {
            id: id.to_owned(),
            name: name.to_owned(),
            description: format!("About {name}"),
            category: category.to_owned(),
            price,
            stock: 1,
            status,
            timestamps: Timestamps::at(DateTime::from_timestamp(0, 0).unwrap()),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("10", "Desk Lamp", "Home", 35.0, ProductStatus::Active),
            product("2", "Wireless Mouse", "Electronics", 25.5, ProductStatus::Active),
            product("3", "Mechanical Keyboard", "Electronics", 120.0, ProductStatus::Draft),
            product("1", "Yoga Mat", "Sports", 19.99, ProductStatus::Archived),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_sorts_by_numeric_id() {
        let result = filter_products(catalog(), &ProductFilter::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "10"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let filter = ProductFilter {
            search: Some("KEY".to_owned()),
            ..ProductFilter::default()
        };
        assert_eq!(ids(&filter_products(catalog(), &filter)), vec!["3"]);

        let filter = ProductFilter {
            search: Some("about desk".to_owned()),
            ..ProductFilter::default()
        };
        assert_eq!(ids(&filter_products(catalog(), &filter)), vec!["10"]);
    }

    #[test]
    fn criteria_combine() {
        let filter = ProductFilter {
            category: Some("electronics".to_owned()),
            status: Some(ProductStatus::Active),
            max_price: Some(100.0),
            ..ProductFilter::default()
        };
        assert_eq!(ids(&filter_products(catalog(), &filter)), vec!["2"]);
    }

    #[test]
    fn patch_keeps_unspecified_fields() {
        let mut p = product("1", "Yoga Mat", "Sports", 19.99, ProductStatus::Archived);
        p.apply_patch(ProductPatch {
            stock: Some(7),
            ..ProductPatch::default()
        });
        assert_eq!(p.stock, 7);
        assert_eq!(p.name, "Yoga Mat");
        assert_eq!(p.status, ProductStatus::Archived);
    }

    #[test]
    fn patch_validation_rejects_blank_name_and_bad_price() {
        let patch = ProductPatch {
            name: Some("  ".to_owned()),
            price: Some(-1.0),
            ..ProductPatch::default()
        };
        let Err(DomainError::Validation(errors)) = patch.validate() else {
            panic!("expected validation error");
        };
        let body = serde_json::to_value(errors.into_body()).unwrap();
        assert_eq!(body["error"]["details"]["name"][0], "Name must not be empty");
        assert_eq!(
            body["error"]["details"]["price"][0],
            "Price must be a positive number"
        );
    }

    #[test]
    fn status_parses_wire_names() {
        assert_eq!("draft".parse::<ProductStatus>().unwrap(), ProductStatus::Draft);
        assert!("deleted".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn serializes_camel_case_with_flat_timestamps() {
        let json = serde_json::to_value(product("1", "Mat", "Sports", 5.0, ProductStatus::Active))
            .unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert!(json.get("timestamps").is_none());
    }
}
