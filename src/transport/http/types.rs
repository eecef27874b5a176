use crate::app::CatalogService;
use crate::domain::product::FieldViolation;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

pub const INVALID_ID_MESSAGE: &str = "ID inválido";
pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";
pub const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido";

/// Shared handler state. Every clone points at the same catalog; every call to
/// [`AppState::new`] starts a fresh, empty one.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<RwLock<CatalogService>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_catalog(CatalogService::new())
    }

    pub fn with_catalog(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub mensagem: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrorResponse {
    pub erros: Vec<FieldViolation>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of products currently held in memory.
    pub produtos: usize,
}
