//! HTTP API Layer
//!
//! REST API for claim document intelligence using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for classification, normalization,
//!   fraud scoring, pipelines, and charts
//! - **Middleware**: Session authentication and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod charts;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pipeline;
pub mod sessions;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{
    auth as auth_handlers, charts as chart_handlers, claims, documents, fraud, health,
    pipeline as pipeline_handlers,
};
use crate::middleware::{audit_middleware, auth_middleware};
use crate::sessions::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub sessions: SessionStore,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let body_limit = config.max_upload_bytes;
    let state = AppState {
        config,
        sessions: SessionStore::new(),
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/auth/login", post(auth_handlers::login));

    let chart_routes = Router::new()
        .route("/classification", post(chart_handlers::classification_chart))
        .route("/severity", post(chart_handlers::severity_chart))
        .route("/fraud", post(chart_handlers::fraud_chart));

    // Protected API routes; audit runs inside auth so it sees the user
    let api_routes = Router::new()
        .route("/auth/logout", post(auth_handlers::logout))
        .route("/classify-document", post(documents::classify))
        .route("/normalize-claim", post(claims::normalize_claim))
        .route("/fraud-score", post(fraud::fraud_score))
        .route("/pipeline-from-text", post(pipeline_handlers::pipeline_from_text))
        .route("/pipeline-from-pdf", post(pipeline_handlers::pipeline_from_pdf))
        .nest("/charts", chart_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
