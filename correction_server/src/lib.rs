//! # Correction Server
//!
//! HTTP API over the monetary correction crates: correction table downloads,
//! per-table model management, rate predictions and value corrections.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod registry;
pub mod routes;
pub mod sources;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::error::ApiError;
pub use crate::registry::{KindCapabilities, KindRegistry};
pub use crate::state::AppState;

use crate::routes::{automacao, health, ia};

/// Build the application router with middleware
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/taxa/automation/get_tipos_tabela_de_correcao",
            get(automacao::get_tipos_tabela_de_correcao),
        )
        .route(
            "/taxa/automation/get_last_tabela_de_correcao/:tipo_tabela",
            get(automacao::get_last_tabela_de_correcao),
        )
        .route("/taxa/ai/create_modelo/:tipo_tabela", get(ia::create_modelo))
        .route("/taxa/ai/post_modelo/:tipo_tabela", post(ia::post_modelo))
        .route("/taxa/ai/delete_modelo/:tipo_tabela", delete(ia::delete_modelo))
        .route("/taxa/ai/update_modelo/:tipo_tabela", put(ia::update_modelo))
        .route("/taxa/ai/get_modelo/:tipo_tabela", get(ia::get_modelo))
        .route("/taxa/ai/post_predicao", post(ia::post_predicao))
        .route("/taxa/ai/post_calculo", post(ia::post_calculo))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_token,
        ));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/health", get(health::liveness))
        .route("/health/live", get(health::liveness))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
