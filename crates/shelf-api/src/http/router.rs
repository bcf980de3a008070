//! Axum router configuration with middleware.
//!
//! Middleware: CORS, request tracing.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Credentials
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signin", post(handlers::auth::signin))
        // Current user
        .route(
            "/users/me",
            get(handlers::user::me).patch(handlers::user::edit_me),
        )
        // Bookmarks
        .route(
            "/bookmarks",
            get(handlers::bookmark::list_bookmarks).post(handlers::bookmark::create_bookmark),
        )
        .route(
            "/bookmarks/{id}",
            get(handlers::bookmark::get_bookmark)
                .patch(handlers::bookmark::edit_bookmark)
                .delete(handlers::bookmark::delete_bookmark),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness probe (no auth required).
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
