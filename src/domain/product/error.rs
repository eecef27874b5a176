//! Error types for product operations.

use super::ProductId;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One rejected field, reported in rule declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors that terminate a product request. None of them has side effects.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// One or more field rules rejected the payload.
    #[error("validation failed on {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldViolation>),

    /// No product with this id exists.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The path id is not an integer.
    #[error("invalid product id: {0:?}")]
    InvalidId(String),
}
