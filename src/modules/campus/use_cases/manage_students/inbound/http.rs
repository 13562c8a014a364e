use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::campus::adapters::inbound::http_error::{
    error_response, parse_student_id, rejected_body,
};
use crate::modules::campus::core::student::StudentDraft;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> Response {
    let students = state.students.list_students().await;
    if students.is_empty() {
        return error_response(StatusCode::NOT_FOUND, "no students have been created yet");
    }
    Json(students).into_response()
}

pub async fn show(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_student_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.students.get_student(id).await {
        Ok(student) => Json(student).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<StudentDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };

    match state.students.create_student(draft).await {
        Ok(student) => Json(student).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<StudentDraft>, JsonRejection>,
) -> Response {
    let id = match parse_student_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    // An unknown id answers 404 even when the body is unreadable.
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return match state.students.get_student(id).await {
                Ok(_) => rejected_body(rejection),
                Err(err) => err.into_response(),
            };
        }
    };

    match state.students.update_student(id, draft).await {
        Ok(student) => Json(student).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_student_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.students.delete_student(id).await {
        Ok(student) => Json(student).into_response(),
        Err(err) => err.into_response(),
    }
}
