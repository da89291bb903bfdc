//! Model lifecycle, rate prediction and value correction

use super::file_response;
use crate::dto::{CalculoInput, CalculoOutput, PredicaoInput, PredicaoOutput, Resposta};
use crate::error::{ApiError, MODEL_FILE_NOT_FOUND, MODEL_NOT_TRAINED};
use crate::sources::{SourceError, TableFile};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use correction_forecast::{train_model, ForecastError, ModelArtifact};
use correction_math::validation::{
    ensure_future, ensure_not_before, ensure_positive_principal, ensure_within_horizon,
};
use correction_math::{correct_value, forecast_table, predict_checked, CorrectionTableKind, Period};

const MODEL_CONTENT_TYPE: &str = "application/octet-stream";

fn upstream_unavailable(kind: CorrectionTableKind, err: SourceError) -> ApiError {
    tracing::error!(%kind, error = %err, "failed to fetch rate history");
    ApiError::Internal("Erro ao acessar a API externa do BCB.".to_string())
}

/// Load the model a computation depends on; a missing model is a server-side
/// precondition failure here, not a 404
fn load_model(state: &AppState, kind: CorrectionTableKind) -> Result<ModelArtifact, ApiError> {
    state.store.load(kind).map_err(|err| match err {
        ForecastError::ModelNotFound(_) => ApiError::Internal(MODEL_NOT_TRAINED.to_string()),
        other => {
            tracing::error!(%kind, error = %other, "failed to load model");
            ApiError::Internal("Erro ao carregar o arquivo do modelo.".to_string())
        }
    })
}

/// Map store errors for the file-management endpoints
fn store_error(kind: CorrectionTableKind, err: ForecastError, action: &str) -> ApiError {
    match err {
        ForecastError::ModelNotFound(_) => ApiError::NotFound(MODEL_FILE_NOT_FOUND.to_string()),
        ForecastError::ModelError(msg) => {
            tracing::warn!(%kind, %msg, "rejected model file");
            ApiError::BadRequest("Arquivo de modelo inválido.".to_string())
        }
        other => {
            tracing::error!(%kind, error = %other, action, "model store failure");
            ApiError::Internal(format!("Erro ao {} o arquivo do modelo.", action))
        }
    }
}

/// Train the kind's model from its rate history, store it and return it
pub async fn create_modelo(
    State(state): State<AppState>,
    Path(kind): Path<CorrectionTableKind>,
) -> Result<Response, ApiError> {
    tracing::info!(%kind, "create model requested");

    let capabilities = state.capabilities(kind)?;
    let Some(rates) = capabilities.rate_source.clone() else {
        return Err(ApiError::NotImplemented(format!(
            "Criação de modelo para a tabela {} ainda não foi implementada.",
            kind
        )));
    };

    let history = rates
        .fetch()
        .await
        .map_err(|err| upstream_unavailable(kind, err))?;

    let family = capabilities.family;
    let report = tokio::task::spawn_blocking(move || train_model(family, &history))
        .await
        .map_err(|err| ApiError::Internal(format!("Treinamento interrompido: {}", err)))?
        .map_err(|err| {
            tracing::error!(%kind, error = %err, "training failed");
            ApiError::Internal("Erro ao treinar o modelo.".to_string())
        })?;

    let path = state
        .store
        .save(kind, &report.artifact)
        .map_err(|err| store_error(kind, err, "salvar"))?;
    let bytes = report
        .artifact
        .to_bytes()
        .map_err(|err| store_error(kind, err, "serializar"))?;

    tracing::info!(%kind, path = %path.display(), "model created");
    Ok(file_response(TableFile {
        file_name: kind.model_file_name(),
        content_type: MODEL_CONTENT_TYPE,
        bytes,
    }))
}

/// Upload a model, creating or overwriting it
pub async fn post_modelo(
    State(state): State<AppState>,
    Path(kind): Path<CorrectionTableKind>,
    body: Bytes,
) -> Result<Json<Resposta>, ApiError> {
    tracing::info!(%kind, size = body.len(), "model upload received");

    state
        .store
        .write_bytes(kind, &body)
        .map_err(|err| store_error(kind, err, "carregar"))?;

    Ok(Json(Resposta::new("Modelo carregado com sucesso")))
}

/// Remove the stored model
pub async fn delete_modelo(
    State(state): State<AppState>,
    Path(kind): Path<CorrectionTableKind>,
) -> Result<Json<Resposta>, ApiError> {
    tracing::info!(%kind, "model removal requested");

    state
        .store
        .delete(kind)
        .map_err(|err| store_error(kind, err, "remover"))?;

    Ok(Json(Resposta::new("Modelo excluído com sucesso")))
}

/// Replace an existing model
pub async fn update_modelo(
    State(state): State<AppState>,
    Path(kind): Path<CorrectionTableKind>,
    body: Bytes,
) -> Result<Json<Resposta>, ApiError> {
    tracing::info!(%kind, size = body.len(), "model update received");

    state
        .store
        .replace_bytes(kind, &body)
        .map_err(|err| store_error(kind, err, "atualizar"))?;

    Ok(Json(Resposta::new("Modelo atualizado com sucesso")))
}

/// Download the stored model
pub async fn get_modelo(
    State(state): State<AppState>,
    Path(kind): Path<CorrectionTableKind>,
) -> Result<Response, ApiError> {
    tracing::info!(%kind, "model download requested");

    let bytes = state
        .store
        .read_bytes(kind)
        .map_err(|err| store_error(kind, err, "buscar"))?;

    Ok(file_response(TableFile {
        file_name: kind.model_file_name(),
        content_type: MODEL_CONTENT_TYPE,
        bytes,
    }))
}

/// Predict the rate of a future month
pub async fn post_predicao(
    State(state): State<AppState>,
    Json(input): Json<PredicaoInput>,
) -> Result<Json<PredicaoOutput>, ApiError> {
    let kind = input.tipo_tabela;
    tracing::info!(%kind, ano = input.ano, mes = input.mes, "prediction requested");

    let target = Period::new(input.ano, input.mes)?;
    let current = state.current_period();
    ensure_future(target, current)?;
    ensure_within_horizon(target, current)?;

    let model = load_model(&state, kind)?;
    let valor_previsto = predict_checked(&model, target).map_err(|err| {
        tracing::error!(%kind, error = %err, "prediction failed");
        ApiError::from(err)
    })?;

    tracing::info!(%kind, %target, valor_previsto, "prediction served");
    Ok(Json(PredicaoOutput {
        ano: input.ano,
        mes: input.mes,
        valor_previsto,
    }))
}

/// Correct a value from a reference month using the forecast-extended table
pub async fn post_calculo(
    State(state): State<AppState>,
    Json(input): Json<CalculoInput>,
) -> Result<Json<CalculoOutput>, ApiError> {
    let kind = input.tipo_tabela;
    tracing::info!(
        %kind,
        referencia_ano = input.referencia_ano,
        referencia_mes = input.referencia_mes,
        predicao_ano = input.predicao_ano,
        predicao_mes = input.predicao_mes,
        valor = input.valor,
        "correction requested"
    );

    let capabilities = state.capabilities(kind)?;

    ensure_positive_principal(input.valor)?;
    let reference = Period::new(input.referencia_ano, input.referencia_mes)?;
    ensure_not_before(reference, capabilities.minimum_reference)?;
    let target = Period::new(input.predicao_ano, input.predicao_mes)?;
    let current = state.current_period();
    ensure_future(target, current)?;
    ensure_within_horizon(target, current)?;

    let model = load_model(&state, kind)?;

    let Some(rates) = capabilities.rate_source.clone() else {
        return Err(ApiError::NotImplemented(format!(
            "Cálculo com a tabela {} ainda não foi implementado.",
            kind
        )));
    };
    let history = rates
        .fetch()
        .await
        .map_err(|err| upstream_unavailable(kind, err))?;

    let table = forecast_table(&history, &model, target)?;
    let correction = correct_value(input.valor, reference, &table)?;

    tracing::info!(
        %kind,
        %reference,
        %target,
        taxa = correction.taxa,
        valor_previsto = correction.valor_previsto,
        "correction computed"
    );

    Ok(Json(CalculoOutput {
        ano: reference.year(),
        mes: reference.month(),
        taxa: correction.taxa,
        valor_previsto: correction.valor_previsto,
    }))
}
