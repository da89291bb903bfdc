//! API error type and its HTTP representation

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use correction_math::CorrectionError;
use thiserror::Error;

pub const MODEL_NOT_TRAINED: &str = "Modelo não encontrado. Treine ou carregue o modelo primeiro.";
pub const MODEL_FILE_NOT_FOUND: &str = "Arquivo do modelo não encontrado.";

/// Errors returned by handlers, rendered as `{"detail": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Token inválido")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NotImplemented(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %detail, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %detail, "request rejected");
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl From<CorrectionError> for ApiError {
    fn from(err: CorrectionError) -> Self {
        match err {
            CorrectionError::InvalidInput(msg) => ApiError::BadRequest(msg),
            CorrectionError::InvalidPeriod { year, month } => {
                ApiError::BadRequest(format!("Período inválido: ano={}, mes={}", year, month))
            }
            CorrectionError::ReferenceNotFound(period) => ApiError::NotFound(format!(
                "Período de referência {} fora da tabela de correção calculada.",
                period
            )),
            CorrectionError::PredictionFailure { period, reason } => ApiError::Internal(format!(
                "Erro ao calcular a predição para {}: {}",
                period, reason
            )),
            CorrectionError::DuplicatePeriod(period) => ApiError::Internal(format!(
                "Série histórica com período duplicado: {}",
                period
            )),
        }
    }
}
