//! Correction table listing and download

use super::file_response;
use crate::error::ApiError;
use crate::sources::SourceError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use correction_math::CorrectionTableKind;

pub async fn get_tipos_tabela_de_correcao(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    tracing::info!("listing correction table kinds");
    Json(state.registry.kinds().map(|kind| kind.as_str()).collect())
}

pub async fn get_last_tabela_de_correcao(
    State(state): State<AppState>,
    Path(kind): Path<CorrectionTableKind>,
) -> Result<Response, ApiError> {
    tracing::info!(%kind, "latest correction table requested");

    let capabilities = state.capabilities(kind)?;
    let file = capabilities
        .table_source
        .latest_table()
        .await
        .map_err(|err| match err {
            SourceError::Unsupported(msg) => ApiError::NotImplemented(msg),
            SourceError::Data(inner) => {
                tracing::error!(%kind, error = %inner, "failed to build table");
                ApiError::Internal("Erro ao gerar o arquivo da tabela de correção.".to_string())
            }
            other => {
                tracing::error!(%kind, error = %other, "upstream unavailable");
                ApiError::Internal("Erro ao acessar a API externa do BCB.".to_string())
            }
        })?;

    tracing::info!(%kind, file = %file.file_name, "returning correction table");
    Ok(file_response(file))
}
