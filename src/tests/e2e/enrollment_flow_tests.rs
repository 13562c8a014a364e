use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::{empty_request, json_request, read_json};
use crate::tests::fixtures::events::EventDraftBuilder;
use crate::tests::fixtures::students::StudentDraftBuilder;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn deleting_a_student_purges_every_roster_it_appears_in() {
    let app = router(AppState::in_memory());

    for (name, email) in [
        ("Ada Lovelace", "ada@campus.edu"),
        ("Grace Hopper", "grace@campus.edu"),
    ] {
        let body = StudentDraftBuilder::new().name(name).email(email).to_json();
        let (status, _) = send(&app, json_request("POST", "/api/students", body)).await;
        assert_eq!(status, StatusCode::OK);
    }
    for time in ["09:00", "15:30"] {
        let body = EventDraftBuilder::new().time(time).to_json();
        let (status, _) = send(&app, json_request("POST", "/api/events", body)).await;
        assert_eq!(status, StatusCode::OK);
    }
    for path in [
        "/api/events/1/enrolled/1",
        "/api/events/1/enrolled/2",
        "/api/events/2/enrolled/1",
    ] {
        let (status, _) = send(&app, empty_request("POST", path)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, removed) = send(&app, empty_request("DELETE", "/api/students/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["email"], "ada@campus.edu");

    let (_, first) = send(&app, empty_request("GET", "/api/events/1")).await;
    assert_eq!(first["enrolledStudentIds"], serde_json::json!([2]));

    let (status, second) = send(&app, empty_request("GET", "/api/events/2/enrolled")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(second["error"], "no students are enrolled in event 2");

    let (status, _) = send(&app, empty_request("POST", "/api/events/2/enrolled/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_keep_growing_from_the_highest_remaining_id() {
    let app = router(AppState::in_memory());

    for n in 1..=3 {
        let body = StudentDraftBuilder::new()
            .email(format!("s{n}@campus.edu"))
            .to_json();
        let (_, student) = send(&app, json_request("POST", "/api/students", body)).await;
        assert_eq!(student["id"], n);
    }

    send(&app, empty_request("DELETE", "/api/students/2")).await;
    let body = StudentDraftBuilder::new().email("s4@campus.edu").to_json();
    let (_, student) = send(&app, json_request("POST", "/api/students", body)).await;
    assert_eq!(student["id"], 4);

    let (status, list) = send(&app, empty_request("GET", "/api/students")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn event_and_student_ids_are_numbered_independently() {
    let app = router(AppState::in_memory());

    let (_, student) = send(
        &app,
        json_request("POST", "/api/students", StudentDraftBuilder::new().to_json()),
    )
    .await;
    let (_, event) = send(
        &app,
        json_request("POST", "/api/events", EventDraftBuilder::new().to_json()),
    )
    .await;

    assert_eq!(student["id"], 1);
    assert_eq!(event["id"], 1);
}
