use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::activities::RosterError;

/// Error body returned to clients: `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound | RosterError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            RosterError::AlreadySignedUp | RosterError::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
