//! Field rules for product payloads.
//!
//! Rules run before any store access and collect every violation, in declaration
//! order (`nome` then `preco`). On success they hand back typed input, so handlers
//! never look at the raw payload again.

use super::{CreateProductInput, FieldViolation, ProductError, ProductPayload, UpdateProductInput};
use serde_json::{Number, Value as JsonValue};

pub const NAME_FIELD: &str = "nome";
pub const PRICE_FIELD: &str = "preco";

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const NAME_EMPTY: &str = "Nome não pode ser vazio";
pub const PRICE_INVALID: &str = "Preço deve ser um número maior que zero";

/// Accepts a string that is not blank after trimming. The original string is kept.
pub fn accept_name(value: &JsonValue) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Accepts a number, or a numeric string, that is finite and strictly positive.
///
/// Numbers are returned unchanged. Numeric strings become an integer when they
/// spell one (`"10"` -> `10`), a float otherwise.
pub fn accept_price(value: &JsonValue) -> Option<Number> {
    let price = match value {
        JsonValue::Number(n) => n.clone(),
        JsonValue::String(s) => match s.parse::<u64>() {
            Ok(int) => Number::from(int),
            Err(_) => Number::from_f64(s.parse::<f64>().ok()?)?,
        },
        _ => return None,
    };
    let as_float = price.as_f64()?;
    (as_float.is_finite() && as_float > 0.0).then_some(price)
}

/// `nome` and `preco` are both required.
pub fn validate_create(payload: &ProductPayload) -> Result<CreateProductInput, ProductError> {
    let mut violations = Vec::new();

    let name = payload.nome.as_ref().and_then(accept_name);
    if name.is_none() {
        violations.push(FieldViolation::new(NAME_FIELD, NAME_REQUIRED));
    }

    let price = payload.preco.as_ref().and_then(accept_price);
    if price.is_none() {
        violations.push(FieldViolation::new(PRICE_FIELD, PRICE_INVALID));
    }

    match (name, price) {
        (Some(name), Some(price)) => Ok(CreateProductInput { name, price }),
        _ => Err(ProductError::ValidationFailed(violations)),
    }
}

/// Both fields are optional, but any key present in the body (even `null`) is
/// validated with the same rules as on create.
pub fn validate_update(payload: &ProductPayload) -> Result<UpdateProductInput, ProductError> {
    let mut violations = Vec::new();
    let mut input = UpdateProductInput::default();

    if let Some(value) = &payload.nome {
        match accept_name(value) {
            Some(name) => input.name = Some(name),
            None => violations.push(FieldViolation::new(NAME_FIELD, NAME_EMPTY)),
        }
    }

    if let Some(value) = &payload.preco {
        match accept_price(value) {
            Some(price) => input.price = Some(price),
            None => violations.push(FieldViolation::new(PRICE_FIELD, PRICE_INVALID)),
        }
    }

    if violations.is_empty() {
        Ok(input)
    } else {
        Err(ProductError::ValidationFailed(violations))
    }
}
