use mock_scenarios::FieldErrors;
use mock_store::{
    CursorPage, InMemoryEntityStore, ListRequest, Page, PageRequest, SequentialIds,
};

use super::error::DomainError;
use super::fixtures;
use super::order::{Order, OrderFilter, OrderPatch, filter_orders};
use super::product::{Product, ProductDraft, ProductFilter, ProductPatch, filter_products};
use crate::config::FixturesConfig;

pub type ProductStore = InMemoryEntityStore<Product, ProductFilter>;
pub type OrderStore = InMemoryEntityStore<Order, OrderFilter>;

/// Product and order operations over fixture-seeded stores.
pub struct AdminService {
    products: ProductStore,
    orders: OrderStore,
    fixtures: FixturesConfig,
}

/// Counts after a re-seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub products: usize,
    pub orders: usize,
}

impl AdminService {
    #[must_use]
    pub fn new(fixtures: FixturesConfig) -> Self {
        let products = InMemoryEntityStore::new(
            filter_products,
            SequentialIds::starting_at(u64::from(fixtures.products) + 1),
            fixtures::products(fixtures.products),
        );
        let orders = InMemoryEntityStore::new(
            filter_orders,
            SequentialIds::starting_at(u64::from(fixtures.orders) + 1),
            fixtures::orders(fixtures.orders),
        );
        Self {
            products,
            orders,
            fixtures,
        }
    }

    /// Restores both stores to their fixture state.
    pub fn reseed(&self) -> SeedSummary {
        self.products.seed(fixtures::products(self.fixtures.products));
        self.orders.seed(fixtures::orders(self.fixtures.orders));
        let summary = SeedSummary {
            products: self.products.len(),
            orders: self.orders.len(),
        };
        tracing::info!(
            products = summary.products,
            orders = summary.orders,
            "Fixtures re-seeded"
        );
        summary
    }

    /// # Errors
    /// [`DomainError::Store`] for an invalid page size.
    pub fn list_products(
        &self,
        request: &ListRequest<ProductFilter>,
    ) -> Result<Page<Product>, DomainError> {
        Ok(self.products.get_entities(request)?)
    }

    /// # Errors
    /// [`DomainError::NotFound`] when no product has `id`.
    pub fn get_product(&self, id: &str) -> Result<Product, DomainError> {
        self.products
            .get_entity(&id.to_owned())
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    /// # Errors
    /// [`DomainError::Store`] if no free id could be generated.
    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let product = self.products.create_entity(draft)?;
        tracing::debug!(id = %product.id, "Product created");
        Ok(product)
    }

    /// # Errors
    /// [`DomainError::Validation`] for invalid fields, [`DomainError::NotFound`]
    /// when no product has `id`.
    pub fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product, DomainError> {
        patch.validate()?;
        self.products
            .update_entity(&id.to_owned(), patch)
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    /// # Errors
    /// [`DomainError::NotFound`] when no product has `id`.
    pub fn delete_product(&self, id: &str) -> Result<(), DomainError> {
        if self.products.delete_entity(&id.to_owned()) {
            tracing::debug!(id, "Product deleted");
            Ok(())
        } else {
            Err(DomainError::not_found("Product", id))
        }
    }

    /// # Errors
    /// [`DomainError::Store`] for an invalid page size.
    pub fn list_orders(
        &self,
        request: &ListRequest<OrderFilter>,
    ) -> Result<CursorPage<Order>, DomainError> {
        Ok(self.orders.get_entities_cursor(request)?)
    }

    /// # Errors
    /// [`DomainError::NotFound`] when no order has `id`.
    pub fn get_order(&self, id: &str) -> Result<Order, DomainError> {
        self.orders
            .get_entity(&id.to_owned())
            .ok_or_else(|| DomainError::not_found("Order", id))
    }

    /// # Errors
    /// [`DomainError::Validation`] without a status, [`DomainError::NotFound`]
    /// when no order has `id`.
    pub fn update_order(&self, id: &str, patch: OrderPatch) -> Result<Order, DomainError> {
        if patch.status.is_none() {
            let mut errors = FieldErrors::default();
            errors.add("status", "Status is required");
            return Err(DomainError::Validation(errors));
        }
        self.orders
            .update_entity(&id.to_owned(), patch)
            .ok_or_else(|| DomainError::not_found("Order", id))
    }
}

/// Validates `page` without touching a store; used to answer `empty` pages.
///
/// # Errors
/// [`DomainError::Store`] for an invalid page size.
pub fn validated_page(page: PageRequest) -> Result<PageRequest, DomainError> {
    Ok(page.validated()?)
}
