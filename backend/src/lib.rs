//! # Camp Finder Backend
//!
//! Serves the camp search API and the built single-page app.
//!
//! ## Architecture
//!
//! ```text
//! SPA (yew frontend)
//!     ↓
//! IO Layer (REST handlers, identity extractors, error mapping)
//!     ↓
//! Domain Layer (query builder, camp service)
//!     ↓
//! Storage Layer (SQLite document store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::CampService;
use crate::io::rest::ErrorPolicy;
use crate::storage::{CampRepository, DbConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub camp_service: CampService,
    pub errors: ErrorPolicy,
}

impl AppState {
    pub fn new(camp_service: CampService, errors: ErrorPolicy) -> Self {
        Self {
            camp_service,
            errors,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up domain model");
    let camp_repository = Arc::new(CampRepository::new(db_conn));
    let camp_service = CampService::new(camp_repository);

    if config.dev_mode {
        info!("Development mode: internal error detail is exposed in responses");
    }

    Ok(AppState::new(camp_service, ErrorPolicy::new(config.dev_mode)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid frontend origin: {}", config.frontend_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/camps", get(io::list_camps).post(io::create_camp))
        .route("/camps/search", get(io::search_camps).post(io::search_camps_body))
        .route(
            "/camps/:id",
            get(io::get_camp).put(io::update_camp).delete(io::delete_camp),
        )
        .route("/categories", get(io::list_categories));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.frontend_dist))
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::test_repository;

    #[tokio::test]
    async fn test_create_router_rejects_bad_origin() {
        let state = AppState::new(CampService::new(test_repository().await), ErrorPolicy::default());
        let config = ServerConfig {
            frontend_origin: "not a\nheader".to_string(),
            ..ServerConfig::default()
        };
        assert!(create_router(state, &config).is_err());
    }

    #[tokio::test]
    async fn test_initialize_backend_with_memory_database() {
        let config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            ..ServerConfig::default()
        };
        let state = initialize_backend(&config).await.unwrap();
        assert!(state.camp_service.list_camps().await.unwrap().is_empty());
    }
}
