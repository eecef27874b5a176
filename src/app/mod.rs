pub mod catalog_service;

pub use catalog_service::{parse_product_id, CatalogService};
