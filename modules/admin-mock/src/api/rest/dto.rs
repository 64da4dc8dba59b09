//! Query and body shapes accepted by the admin endpoints.

use mock_scenarios::FieldErrors;
use mock_store::{ListRequest, PageRequest};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::order::{OrderFilter, OrderStatus};
use crate::domain::product::{ProductDraft, ProductFilter, ProductStatus, check_price};
use crate::domain::service::SeedSummary;

pub const DEFAULT_PRODUCT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_ORDER_PAGE_SIZE: u32 = 20;

/// A filter value of `""` or `"all"` means "no restriction".
fn criterion(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// `GET /api/v1/products` query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub max_price: Option<f64>,
}

impl ProductListQuery {
    /// # Errors
    /// [`DomainError::InvalidInput`] for an unknown status.
    pub fn into_request(self) -> Result<ListRequest<ProductFilter>, DomainError> {
        let status = criterion(self.status)
            .map(|s| s.parse::<ProductStatus>())
            .transpose()?;
        Ok(ListRequest::new(
            PageRequest::new(
                self.page.unwrap_or(1),
                self.limit.unwrap_or(DEFAULT_PRODUCT_PAGE_SIZE),
            ),
            ProductFilter {
                search: criterion(self.search),
                category: criterion(self.category),
                status,
                max_price: self.max_price,
            },
        ))
    }
}

/// `GET /api/v1/orders` query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl OrderListQuery {
    /// # Errors
    /// [`DomainError::InvalidInput`] for an unknown status.
    pub fn into_request(self) -> Result<ListRequest<OrderFilter>, DomainError> {
        let status = criterion(self.status)
            .map(|s| s.parse::<OrderStatus>())
            .transpose()?;
        Ok(ListRequest::new(
            PageRequest::new(
                self.page.unwrap_or(1),
                self.limit.unwrap_or(DEFAULT_ORDER_PAGE_SIZE),
            ),
            OrderFilter {
                search: criterion(self.search),
                status,
            },
        ))
    }
}

/// `POST /api/v1/products` body. Required fields are optional here so that
/// missing ones are reported as field errors rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl CreateProductRequest {
    /// # Errors
    /// [`DomainError::Validation`] listing every missing or invalid field.
    pub fn into_draft(self) -> Result<ProductDraft, DomainError> {
        let mut errors = FieldErrors::default();

        let name = self
            .name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());
        if name.is_none() {
            errors.add("name", "Name is required");
        }
        match self.price {
            Some(price) => check_price(price, &mut errors),
            None => errors.add("price", "Price is required"),
        }

        match (name, self.price) {
            (Some(name), Some(price)) if errors.is_empty() => Ok(ProductDraft {
                name,
                description: self.description.unwrap_or_default(),
                category: self
                    .category
                    .unwrap_or_else(|| "Uncategorized".to_owned()),
                price,
                stock: self.stock.unwrap_or_default(),
                status: self.status.unwrap_or_default(),
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

/// `POST /__mock/v1/fixtures/reset` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSummaryDto {
    pub products: usize,
    pub orders: usize,
}

impl From<SeedSummary> for SeedSummaryDto {
    fn from(summary: SeedSummary) -> Self {
        Self {
            products: summary.products,
            orders: summary.orders,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn product_query_defaults() {
        let request = ProductListQuery::default().into_request().unwrap();
        assert_eq!(request.page, PageRequest::new(1, DEFAULT_PRODUCT_PAGE_SIZE));
        assert_eq!(request.filter, ProductFilter::default());
    }

    #[test]
    fn all_and_blank_mean_unfiltered() {
        let query: ProductListQuery =
            serde_urlencoded::from_str("category=all&status=All&search=%20").unwrap();
        let request = query.into_request().unwrap();
        assert_eq!(request.filter, ProductFilter::default());
    }

    #[test]
    fn query_uses_camel_case_max_price() {
        let query: ProductListQuery =
            serde_urlencoded::from_str("page=2&limit=5&maxPrice=49.5&status=draft").unwrap();
        let request = query.into_request().unwrap();
        assert_eq!(request.page, PageRequest::new(2, 5));
        assert_eq!(request.filter.max_price, Some(49.5));
        assert_eq!(request.filter.status, Some(ProductStatus::Draft));
    }

    #[test]
    fn unknown_status_is_invalid_input() {
        let query = OrderListQuery {
            status: Some("lost".to_owned()),
            ..OrderListQuery::default()
        };
        assert!(matches!(
            query.into_request(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn create_request_reports_all_missing_fields() {
        let Err(DomainError::Validation(errors)) = CreateProductRequest::default().into_draft()
        else {
            panic!("expected validation error");
        };
        let body = serde_json::to_value(errors.into_body()).unwrap();
        assert_eq!(body["error"]["details"]["name"][0], "Name is required");
        assert_eq!(body["error"]["details"]["price"][0], "Price is required");
    }

    #[test]
    fn create_request_fills_defaults() {
        let draft = CreateProductRequest {
            name: Some(" Tea Pot ".to_owned()),
            price: Some(12.0),
            ..CreateProductRequest::default()
        }
        .into_draft()
        .unwrap();
        assert_eq!(draft.name, "Tea Pot");
        assert_eq!(draft.category, "Uncategorized");
        assert_eq!(draft.status, ProductStatus::Active);
        assert_eq!(draft.stock, 0);
    }
}
