//! HTTP API Layer
//!
//! This crate exposes the claim inference engine over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Health check plus single and batch claim evaluation
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Loosely typed claim records and evaluation responses
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use domain_claims::InferenceEngine;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub engine: InferenceEngine,
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
    let state = AppState {
        config,
        engine: InferenceEngine::new(),
    };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/evaluate", post(claims::evaluate_claim))
        .route("/evaluate/batch", post(claims::evaluate_batch));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
