use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::campus::core::errors::CampusError;
use crate::modules::campus::core::event::EventId;
use crate::modules::campus::core::student::StudentId;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// A body that is not JSON, or has a field of the wrong JSON type, is a malformed request.
pub fn rejected_body(rejection: JsonRejection) -> Response {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// A path segment that is not a number answers 404, like any other unknown id.
pub fn parse_student_id(raw: &str) -> Result<StudentId, Response> {
    raw.parse().map_err(|_| unknown_id(format!("student {raw} not found")))
}

pub fn parse_event_id(raw: &str) -> Result<EventId, Response> {
    raw.parse().map_err(|_| unknown_id(format!("event {raw} not found")))
}

fn unknown_id(message: String) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}

impl IntoResponse for CampusError {
    fn into_response(self) -> Response {
        let status = match &self {
            CampusError::Validation(_) | CampusError::Conflict(_) => StatusCode::BAD_REQUEST,
            CampusError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        error_response(status, self.to_string())
    }
}
