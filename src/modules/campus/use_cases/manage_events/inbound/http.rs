use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::campus::adapters::inbound::http_error::{
    error_response, parse_event_id, rejected_body,
};
use crate::modules::campus::core::event::EventDraft;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> Response {
    let events = state.events.list_events().await;
    if events.is_empty() {
        return error_response(StatusCode::NOT_FOUND, "no events have been created yet");
    }
    Json(events).into_response()
}

pub async fn show(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_event_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.events.get_event(id).await {
        Ok(event) => Json(event).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EventDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };

    match state.events.create_event(draft).await {
        Ok(event) => Json(event).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<EventDraft>, JsonRejection>,
) -> Response {
    let id = match parse_event_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    // An unknown id answers 404 even when the body is unreadable.
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return match state.events.get_event(id).await {
                Ok(_) => rejected_body(rejection),
                Err(err) => err.into_response(),
            };
        }
    };

    match state.events.update_event(id, draft).await {
        Ok(event) => Json(event).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_event_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.events.delete_event(id).await {
        Ok(event) => Json(event).into_response(),
        Err(err) => err.into_response(),
    }
}
