//! Sistema de manejo de errores
//!
//! Toda falla del store se traduce en una única clase de error con HTTP 500.
//! Los rechazos del extractor (JSON malformado, id no numérico) conservan su
//! status pero responden con el mismo sobre `{ success: false, error }`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::dto::api_response::ApiResponse;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("{0}")]
    InvalidPath(#[from] PathRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::InvalidPath(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match &self {
            AppError::Database(_) | AppError::Store(_) => {
                error!("❌ Error del store: {}", message);
            }
            AppError::InvalidBody(_) | AppError::InvalidPath(_) => {
                warn!("⚠️ Request rechazado ({}): {}", status, message);
            }
        }

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
