//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA runs on its own origin and calls this backend directly, so every
//! route sits behind a permissive CORS layer. `/book-trip`, `/make-payment`
//! and `/search-flights` are not routed and fall through to `404`.

pub mod auth;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
