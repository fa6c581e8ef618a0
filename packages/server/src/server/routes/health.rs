use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    activities: usize,
}

/// Health check endpoint
///
/// The roster lives in memory, so the process being able to answer is the
/// whole check. Reports how many activities are loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        activities: state.roster.activity_count().await,
    })
}
