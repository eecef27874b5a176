//! Domain model for the product catalog.
//!
//! A [`Product`] is the only managed resource. Incoming payloads are never stored
//! directly: they go through [`validation`] first, which turns a loosely-typed
//! [`ProductPayload`] into a [`CreateProductInput`] or [`UpdateProductInput`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value as JsonValue};
use utoipa::ToSchema;

pub mod error;
pub mod query;
pub mod validation;

pub use error::{FieldViolation, ProductError};
pub use query::{filter_and_paginate, ListQuery, ProductPage};
pub use validation::{validate_create, validate_update};

/// Store-assigned identifier. Starts at 1 and is never reused.
pub type ProductId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = u64)]
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Kept as the JSON number that was accepted, so `50` is echoed as `50`.
    #[serde(rename = "preco")]
    #[schema(value_type = f64)]
    pub price: Number,
}

/// Raw request body for create/update, as it arrives on the wire.
///
/// Fields are kept as JSON so the validation rules can report type mismatches
/// as violations instead of failing the whole body. A key that is present with
/// `null` deserializes to `Some(JsonValue::Null)`, distinct from an absent key.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub nome: Option<JsonValue>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub preco: Option<JsonValue>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductInput {
    pub name: String,
    pub price: Number,
}

/// Validated partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub price: Option<Number>,
}

impl UpdateProductInput {
    /// Overwrites the fields that were supplied.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
