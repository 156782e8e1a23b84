use reqwest::{Client, StatusCode};
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn dashboards_require_a_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    for path in [
        "/health/dashboard",
        "/sleep/dashboard",
        "/goals/dashboard",
        "/medications/dashboard",
        "/appointments/dashboard",
        "/reports/dashboard",
    ] {
        let response = client
            .get(&format!("{}{}", &test_app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", path);
    }
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let settings = healthy_you_backend::config::jwt::JwtSettings::new("not-the-app-secret".to_string(), 1);
    let forged = healthy_you_backend::auth::jwt::issue_token(&settings, Uuid::new_v4(), "mallory")
        .expect("Failed to issue token");

    let response = client
        .get(&format!("{}/health/dashboard", &test_app.address))
        .bearer_auth(forged)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_entry_date_is_a_bad_request() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(Uuid::new_v4(), "alice");

    let response = client
        .get(&format!("{}/health/entries/31-12-2026", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .put(&format!("{}/health/entries/2026-02-30", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({ "date": "2026-02-01", "weight": 70.0 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_forms_are_rejected_before_storage() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(Uuid::new_v4(), "alice");

    let cases = vec![
        ("/health/entries", json!({ "date": "2026-05-01", "weight": -3.0 })),
        ("/health/entries", json!({ "date": "2026-05-01", "weight": 70.0, "heart_rate": 900 })),
        ("/sleep/records", json!({ "date": "2026-05-01", "duration": 7.5, "quality": 9 })),
        ("/sleep/records", json!({ "date": "2026-05-01", "duration": 30.0 })),
        ("/goals", json!({ "goal_type": "sleep", "target_value": -1.0 })),
        ("/medications", json!({ "name": "  ", "frequency": "daily", "start_date": "2026-05-01" })),
        ("/medications", json!({
            "name": "Metformin",
            "frequency": "daily",
            "start_date": "2026-05-01",
            "dose_times": [{ "scheduled_time": "08:00:00", "recurring_days": "Mon,Someday" }]
        })),
        ("/appointments", json!({
            "title": "",
            "appointment_date": "2026-05-01",
            "appointment_time": "09:30:00"
        })),
    ];

    for (path, body) in cases {
        let response = client
            .post(&format!("{}{}", &test_app.address, path))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", path, body);
    }
}

#[tokio::test]
async fn unknown_log_status_is_a_bad_request() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let token = test_app.token_for(Uuid::new_v4(), "alice");

    let response = client
        .put(&format!("{}/medications/logs/{}", &test_app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .json(&json!({ "status": "maybe" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Cannot turn into a json.");
    assert_eq!(body["success"], json!(false));
}
