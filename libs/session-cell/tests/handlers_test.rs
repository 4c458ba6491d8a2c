use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::json;
use tokio::sync::RwLock;
use tower::ServiceExt;

use doctor_cell::services::DoctorDirectory;
use session_cell::router::session_routes;
use session_cell::services::SessionStore;
use shared_utils::test_utils::{response_json, TestConfig};

fn create_test_app_with(config: TestConfig) -> Router {
    let config = config.to_app_config();
    let directory = Arc::new(DoctorDirectory::from_config(&config));
    let store = Arc::new(RwLock::new(SessionStore::from_config(&config)));
    session_routes(directory, store)
}

fn create_test_app() -> Router {
    create_test_app_with(TestConfig::default())
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn booking_body(doctor_id: &str) -> serde_json::Value {
    json!({
        "patient": { "name": "Radical Minds", "phone": "+91 98765 43210" },
        "doctor_id": doctor_id,
        "session_type": "Counselling",
        "session_date": "20/03/2099",
        "session_time": "02:00 PM"
    })
}

#[tokio::test]
async fn test_dashboard_lists() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/upcoming")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["sessions"][0]["id"], "session-1");
    assert_eq!(json["sessions"][0]["session_date"], "15/02/2024");
    assert_eq!(json["sessions"][1]["session_mode"], "In-Person");

    let response = app.clone().oneshot(get_request("/completed")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(json["sessions"][0]["id"], "session-3");
    assert_eq!(json["sessions"][2]["id"], "session-5");

    let response = app.oneshot(get_request("/next")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(json["session"]["id"], "session-1");
}

#[tokio::test]
async fn test_next_session_is_null_when_store_is_empty() {
    let app = create_test_app_with(TestConfig::empty_stores());

    let response = app.oneshot(get_request("/next")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response_json(response).await["session"].is_null());
}

#[tokio::test]
async fn test_search_sessions() {
    let app = create_test_app();

    let request = json_request(
        "POST",
        "/search",
        json!({ "query": "kiran", "filters": { "session_modes": ["Online"] } }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["showing"], 2);
    assert_eq!(json["total"], 5);
    assert_eq!(json["upcoming"][0]["id"], "session-1");
    assert_eq!(json["completed"][0]["id"], "session-3");
    assert_eq!(json["filters_active"], true);
}

#[tokio::test]
async fn test_search_rejects_unknown_mode() {
    let app = create_test_app();

    let request = json_request("POST", "/search", json!({ "filters": { "session_modes": ["Video"] } }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_session_facets() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/facets")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(
        json["session_types"],
        json!(["Counselling", "Therapy Session", "Consultation"])
    );
    assert_eq!(
        json["doctor_expertise"],
        json!(["Psychologist", "Psychiatrist", "Clinical Psychologist", "Psychotherapist"])
    );
    assert_eq!(json["session_modes"], json!(["Online", "In-Person"]));

    let response = app.oneshot(get_request("/facets/session_mode")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(json["attribute"], "session_mode");
    assert_eq!(json["values"], json!(["Online", "In-Person"]));
}

#[tokio::test]
async fn test_suggestions() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/suggestions?q=sh")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(
        json["suggestions"],
        json!(["Dr. Priya Sharma", "Dr. Ramesh Naik", "Dr. Suresh Sawant"])
    );

    let response = app.oneshot(get_request("/suggestions")).await.unwrap();
    assert_eq!(response_json(response).await["suggestions"], json!([]));
}

#[tokio::test]
async fn test_doctor_history() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/doctors/doc-1/history")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["sessions"][0]["id"], "session-3");
}

#[tokio::test]
async fn test_session_options() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/doctors/4/options")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["available_modes"], json!(["In-Person", "Online"]));
    assert_eq!(json["session_mode"], "In-Person");
    assert_eq!(
        json["session_types"],
        json!(["Counselling", "Therapy Session", "Consultation"])
    );

    let response = app
        .clone()
        .oneshot(get_request("/doctors/4/options?mode=Online"))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(
        json["session_types"],
        json!(["Counselling", "Online Therapy", "Video Consultation"])
    );

    let response = app
        .clone()
        .oneshot(get_request("/doctors/3/options?mode=Online"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get_request("/doctors/99/options")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_time_slots() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/slots?date=20/03/2099")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["date"], "20/03/2099");
    assert_eq!(json["periods"].as_array().unwrap().len(), 4);
    assert_eq!(json["periods"][0]["period"], "Morning");
    assert_eq!(json["periods"][0]["slots"][0], "08:00 AM");

    let response = app.oneshot(get_request("/slots?date=2099-03-20")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/calendar?year=2099&month=2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let days = json["days"].as_array().unwrap();
    let dated: Vec<_> = days.iter().filter(|d| !d.is_null()).collect();
    assert_eq!(dated.len(), 28);
    assert_eq!(dated[0], &json!("01/02/2099"));
    assert!(days.len() - dated.len() < 7);

    let response = app.oneshot(get_request("/calendar?year=2099&month=13")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_patient() {
    let app = create_test_app();

    let request = json_request(
        "POST",
        "/validate-patient",
        json!({ "name": "Radical Minds", "phone": "+91 98765 43210" }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = json_request("POST", "/validate-patient", json!({ "name": "", "phone": "12" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = response_json(response).await;
    assert_eq!(json["fields"][0]["field"], "name");
    assert_eq!(json["fields"][1]["field"], "phone");
}

#[tokio::test]
async fn test_book_then_complete() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", booking_body("4")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    let session_id = json["session"]["id"].as_str().unwrap().to_string();
    assert!(session_id.starts_with("session-"));
    assert_eq!(json["session"]["status"], "upcoming");
    assert_eq!(json["session"]["session_mode"], "In-Person");
    assert_eq!(json["session"]["location"], "Clinic");
    assert_eq!(json["session"]["session_duration"], "01:00 HR");
    assert_eq!(json["session"]["doctor"]["avatar"], "/test/female.png");
    assert_eq!(json["previous_sessions_with_doctor"], 0);

    let response = app.clone().oneshot(get_request("/upcoming")).await.unwrap();
    assert_eq!(response_json(response).await["total"], 3);

    let complete = json_request("POST", &format!("/{}/complete", session_id), json!({}));
    let response = app.clone().oneshot(complete).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["session"]["status"], "completed");

    let response = app
        .oneshot(json_request("POST", "/", booking_body("4")))
        .await
        .unwrap();
    assert_eq!(response_json(response).await["previous_sessions_with_doctor"], 1);
}

#[tokio::test]
async fn test_booking_reports_invalid_fields() {
    let app = create_test_app();

    let body = json!({
        "patient": { "name": "", "phone": "123" },
        "doctor_id": "3",
        "session_mode": "Online",
        "session_date": "31/02/2099",
        "session_time": "02:00 PM",
        "session_type": "Counselling"
    });
    let response = app.oneshot(json_request("POST", "/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = response_json(response).await;
    assert_eq!(json["error"], "Validation failed");
    let fields: Vec<_> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["name", "phone", "session_date", "session_mode"]);
}

#[tokio::test]
async fn test_booking_unknown_doctor() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request("POST", "/", booking_body("99")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_complete_unknown_session() {
    let app = create_test_app();

    let request = json_request("POST", "/session-404/complete", json!({}));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
