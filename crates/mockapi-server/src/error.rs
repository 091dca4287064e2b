use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mockapi_store::StoreError;
use serde::Serialize;
use thiserror::Error;

pub const TEMPLATE_NOT_FOUND: &str = "Template not found";
pub const PAYMENT_NOT_FOUND: &str = "Payment not found";
pub const TEMPLATE_STORE_UNAVAILABLE: &str = "Template store unavailable";

#[derive(Debug, Error)]
pub enum AppError {
    /// Recurso no encontrado
    #[error("{0}")]
    NotFound(String),

    /// Body invalido, con el status propuesto por el extractor
    #[error("{detail}")]
    Validation { status: StatusCode, detail: String },

    /// El template store no responde
    #[error("{}", TEMPLATE_STORE_UNAVAILABLE)]
    StoreUnavailable,

    /// Error interno
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(TEMPLATE_NOT_FOUND.to_string()),
            other => {
                tracing::error!(error = %other, "Template store failure");
                Self::StoreUnavailable
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { status, .. } => *status,
            AppError::StoreUnavailable | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
