//! Activity roster endpoints.
//!
//! GET    /activities
//! POST   /activities/:activity_name/signup?email=...
//! DELETE /activities/:activity_name/participant?email=...

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::domains::activities::{Confirmation, Roster, RosterError};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// List every activity with its participants.
pub async fn list_activities_handler(State(state): State<AppState>) -> Json<Roster> {
    Json(state.roster.list_activities().await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, RosterError> {
    let confirmation = state.roster.signup(&activity_name, &query.email).await?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, RosterError> {
    let confirmation = state
        .roster
        .unregister(&activity_name, &query.email)
        .await?;
    Ok(Json(confirmation))
}
