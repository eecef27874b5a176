pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::CatalogService;
pub use domain::product::{
    CreateProductInput, ListQuery, Product, ProductError, ProductId, ProductPage, ProductPayload,
    UpdateProductInput,
};
pub use infra::config::AppConfig;
pub use storage::ProductStore;
