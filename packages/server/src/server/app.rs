//! Application setup and server configuration.

use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::activities::RosterStore;
use crate::server::routes::{
    health_handler, list_activities_handler, signup_handler, unregister_handler,
};
use crate::server::static_files::{redirect_to_index, serve_static};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub roster: RosterStore,
}

/// Build the Axum application router around an already-seeded roster.
pub fn build_app(roster: RosterStore) -> Router {
    let app_state = AppState { roster };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE]);

    Router::new()
        .route("/activities", get(list_activities_handler))
        .route("/activities/:activity_name/signup", post(signup_handler))
        .route(
            "/activities/:activity_name/participant",
            delete(unregister_handler),
        )
        // Front-end
        .route("/", get(redirect_to_index))
        .route("/static/*path", get(serve_static))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
