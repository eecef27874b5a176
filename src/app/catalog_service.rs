//! The catalog service.
//!
//! Sits between the HTTP handlers and the [`ProductStore`]:
//! 1.  Parses path ids once, rejecting non-integers before any lookup.
//! 2.  Runs the validation rules and only mutates the store with typed input.
//! 3.  Runs the filter/paginate pipeline for list requests.

use crate::domain::product::{
    filter_and_paginate, validate_create, validate_update, ListQuery, Product, ProductError,
    ProductId, ProductPage, ProductPayload,
};
use crate::storage::ProductStore;

/// Parses a path segment as a product id. Only plain ASCII digits are accepted,
/// so signs and whitespace are rejected along with everything else.
pub fn parse_product_id(raw: &str) -> Result<ProductId, ProductError> {
    let invalid = || ProductError::InvalidId(raw.to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<ProductId>().map_err(|_| invalid())
}

/// Owns one isolated product store. Wrap it in a lock to share across requests.
#[derive(Default)]
pub struct CatalogService {
    store: ProductStore,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            store: ProductStore::new(),
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn list(&self, query: &ListQuery) -> ProductPage {
        let page = filter_and_paginate(self.store.list(), query);
        tracing::debug!(
            total = page.total,
            page = page.page,
            limit = page.limit,
            returned = page.products.len(),
            "listed products"
        );
        page
    }

    pub fn get(&self, raw_id: &str) -> Result<Product, ProductError> {
        let id = parse_product_id(raw_id)?;
        self.store.get_by_id(id).cloned()
    }

    pub fn create(&mut self, payload: &ProductPayload) -> Result<Product, ProductError> {
        let input = validate_create(payload)?;
        let product = self.store.create(input);
        tracing::debug!(id = product.id, "created product");
        Ok(product)
    }

    /// Id is checked first, then the payload, then existence.
    pub fn update(
        &mut self,
        raw_id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, ProductError> {
        let id = parse_product_id(raw_id)?;
        let patch = validate_update(payload)?;
        let product = self.store.update(id, patch)?;
        tracing::debug!(id, "updated product");
        Ok(product)
    }

    pub fn delete(&mut self, raw_id: &str) -> Result<(), ProductError> {
        let id = parse_product_id(raw_id)?;
        self.store.delete(id)?;
        tracing::debug!(id, "deleted product");
        Ok(())
    }
}
