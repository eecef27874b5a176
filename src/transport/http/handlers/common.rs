use crate::domain::product::ProductError;
use crate::transport::http::types::{
    MessageResponse, ValidationErrorResponse, INVALID_BODY_MESSAGE, INVALID_ID_MESSAGE,
    NOT_FOUND_MESSAGE,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn message(status: StatusCode, mensagem: impl Into<String>) -> Response {
    (
        status,
        Json(MessageResponse {
            mensagem: mensagem.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::ValidationFailed(erros) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { erros })).into_response()
            }
            ProductError::InvalidId(_) => message(StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE),
            ProductError::NotFound(_) => message(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        }
    }
}

/// Unparseable or non-JSON bodies are a client error, like a failed rule.
pub fn invalid_body(err: JsonRejection) -> Response {
    tracing::warn!(error = %err, "rejected request body");
    message(
        StatusCode::BAD_REQUEST,
        format!("{}: {}", INVALID_BODY_MESSAGE, err.body_text()),
    )
}

/// Logs one line per incoming request.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(method = %request.method(), path = %request.uri().path(), "request");
    next.run(request).await
}
