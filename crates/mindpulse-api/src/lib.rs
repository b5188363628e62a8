//! mindpulse-api
//!
//! HTTP service for daily check-ins and counselor chat.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use state::AppState;

/// Build the router with all routes and middleware.
pub fn app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(routes::root::service_info))
        .route("/api/health", get(routes::health::health_check))
        .route("/api/analyze-survey", post(routes::survey::analyze_survey))
        .route("/api/chat", post(routes::chat::chat))
        .route(
            "/api/session/{id}",
            get(routes::session::get_session).delete(routes::session::clear_session),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS for the configured origins; `*` or an empty list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
