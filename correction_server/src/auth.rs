//! API token check

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;

/// Header carrying the API token
pub const API_TOKEN_HEADER: &str = "x-api-token";

#[derive(Debug, Deserialize)]
struct TokenQuery {
    api_token: Option<String>,
}

/// Reject requests whose `x-api-token` header or `api_token` query parameter
/// does not match the configured token
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let from_header = request
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let provided = from_header.or_else(|| {
        Query::<TokenQuery>::try_from_uri(request.uri())
            .ok()
            .and_then(|Query(query)| query.api_token)
    });

    match provided {
        Some(token) if token == state.config.api_token => Ok(next.run(request).await),
        _ => {
            tracing::warn!(path = %request.uri().path(), "invalid api token");
            Err(ApiError::Unauthorized)
        }
    }
}
