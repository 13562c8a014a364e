use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::campus::adapters::inbound::http_error::{
    error_response, parse_event_id, parse_student_id,
};
use crate::modules::campus::core::event::EventId;
use crate::modules::campus::core::student::StudentId;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let event_id = match parse_event_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.enrollments.list_enrolled(event_id).await {
        Ok(roster) if roster.enrolled_student_ids.is_empty() => error_response(
            StatusCode::NOT_FOUND,
            format!("no students are enrolled in event {event_id}"),
        ),
        Ok(roster) => Json(roster).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn enroll(
    State(state): State<AppState>,
    Path(raw_ids): Path<(String, String)>,
) -> Response {
    let (event_id, student_id) = match parse_pair(&state, &raw_ids).await {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    match state.enrollments.enroll(event_id, student_id).await {
        Ok(roster) => Json(roster).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn unenroll(
    State(state): State<AppState>,
    Path(raw_ids): Path<(String, String)>,
) -> Response {
    let (event_id, student_id) = match parse_pair(&state, &raw_ids).await {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    match state.enrollments.unenroll(event_id, student_id).await {
        Ok(roster) => Json(roster).into_response(),
        Err(err) => err.into_response(),
    }
}

/// The event is resolved before the student, so an unreadable student id on an unknown
/// event still reports the event.
async fn parse_pair(
    state: &AppState,
    (raw_event_id, raw_student_id): &(String, String),
) -> Result<(EventId, StudentId), Response> {
    let event_id = parse_event_id(raw_event_id)?;
    match parse_student_id(raw_student_id) {
        Ok(student_id) => Ok((event_id, student_id)),
        Err(response) => match state.events.get_event(event_id).await {
            Ok(_) => Err(response),
            Err(err) => Err(err.into_response()),
        },
    }
}
