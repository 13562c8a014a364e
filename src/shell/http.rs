use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::campus::use_cases::manage_enrollments::inbound::http as enrollments_http;
use crate::modules::campus::use_cases::manage_events::inbound::http as events_http;
use crate::modules::campus::use_cases::manage_students::inbound::http as students_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/students",
            get(students_http::list).post(students_http::create),
        )
        .route(
            "/api/students/{id}",
            get(students_http::show)
                .put(students_http::update)
                .delete(students_http::delete),
        )
        .route(
            "/api/events",
            get(events_http::list).post(events_http::create),
        )
        .route(
            "/api/events/{id}",
            get(events_http::show)
                .put(events_http::update)
                .delete(events_http::delete),
        )
        .route("/api/events/{id}/enrolled", get(enrollments_http::list))
        .route(
            "/api/events/{id}/enrolled/{student_id}",
            post(enrollments_http::enroll).delete(enrollments_http::unenroll),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
