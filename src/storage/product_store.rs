//! In-memory product collection.
//!
//! Records are kept in insertion order. Ids come from a counter that only moves
//! forward, so a deleted id is never handed out again. Nothing survives a restart.

use crate::domain::product::{
    CreateProductInput, Product, ProductError, ProductId, UpdateProductInput,
};

pub struct ProductStore {
    products: Vec<Product>,
    next_id: ProductId,
}

impl ProductStore {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// All products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get_by_id(&self, id: ProductId) -> Result<&Product, ProductError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))
    }

    /// Appends a new product with the next id. Input is assumed validated.
    pub fn create(&mut self, input: CreateProductInput) -> Product {
        let product = Product {
            id: self.next_id,
            name: input.name,
            price: input.price,
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Overwrites only the supplied fields and returns the updated record.
    pub fn update(
        &mut self,
        id: ProductId,
        patch: UpdateProductInput,
    ) -> Result<Product, ProductError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        patch.apply_to(product);
        Ok(product.clone())
    }

    /// Removes the product. Survivors keep their relative order.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, ProductError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        Ok(self.products.remove(index))
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
