//! Read pipeline for the list endpoint: name filter, then page window.

use super::Product;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Query string of `GET /produtos`.
///
/// `page` and `limit` are taken as raw strings so that junk input falls back to
/// the defaults instead of rejecting the request.
#[derive(Deserialize, Debug, Default, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring filter on the product name.
    pub nome: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size (default 10).
    pub limit: Option<String>,
}

impl ListQuery {
    /// Builds the query from raw `key=value` pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "nome" => &mut query.nome,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn page(&self) -> u64 {
        coerce_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        coerce_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }

    /// Lowercased filter term, if one was supplied.
    pub fn name_filter(&self) -> Option<String> {
        self.nome.as_deref().map(str::to_lowercase)
    }
}

fn coerce_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductPage {
    /// Number of products that matched the filter, before pagination.
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "produtos")]
    pub products: Vec<Product>,
}

/// Runs the read pipeline over a snapshot of the store. `products` is never mutated.
pub fn filter_and_paginate(products: &[Product], query: &ListQuery) -> ProductPage {
    let filtered: Vec<Product> = match query.name_filter() {
        Some(term) => products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .cloned()
            .collect(),
        None => products.to_vec(),
    };

    let page = query.page();
    let limit = query.limit();
    let total = filtered.len();

    let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);

    ProductPage {
        total,
        page,
        limit,
        products: filtered.into_iter().skip(start).take(take).collect(),
    }
}
