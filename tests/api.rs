use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use safety_api::web::{self, AppState};
use safety_api::Store;

fn app() -> Router {
    web::router(AppState::new(Store::new(), "Tourist Safety API"))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn raw_bytes(app: &Router, uri: &str) -> Vec<u8> {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "healthy", "service": "Tourist Safety API" })
    );
}

#[tokio::test]
async fn test_static_lists() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/emergency-contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 6);
    assert_eq!(
        contacts[0],
        json!({ "id": "police", "label": "Police", "number": "100", "icon": "shield" })
    );

    let (_, body) = send(&app, Method::GET, "/api/risk-zones", None).await;
    let zones = body["zones"].as_array().unwrap();
    assert_eq!(zones.len(), 4);
    assert_eq!(zones[0]["id"], "zone-theft-1");
    assert_eq!(zones[3]["intensity"], 0.95);

    let (_, body) = send(&app, Method::GET, "/api/safe-spots", None).await;
    let spots = body["safe_spots"].as_array().unwrap();
    assert_eq!(spots.len(), 3);
    assert_eq!(spots[1]["type"], "hospital");
    assert_eq!(spots[2]["distance_km"], 4.5);
}

#[tokio::test]
async fn test_static_lists_are_identical_across_calls() {
    let app = app();
    for uri in ["/api/risk-zones", "/api/emergency-contacts"] {
        let first = raw_bytes(&app, uri).await;
        send(
            &app,
            Method::POST,
            "/api/sos",
            Some(json!({ "user_id": "u1", "latitude": 1.0, "longitude": 2.0 })),
        )
        .await;
        assert_eq!(first, raw_bytes(&app, uri).await);
    }
}

#[tokio::test]
async fn test_user_create_get_update_scenario() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Ana", "phone": "555" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User created");
    let id = body["user"]["id"].as_str().unwrap().to_string();
    assert!(body["user"]["email"].is_null());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body["user"]);
    assert_eq!(fetched["name"], "Ana");
    assert_eq!(fetched["phone"], "555");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/users/{id}"),
        Some(json!({ "hotel_name": "Hotel X" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated");
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["name"], "Ana");
    assert_eq!(body["user"]["phone"], "555");
    assert_eq!(body["user"]["hotel_name"], "Hotel X");
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = app();
    let (_, a) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "id": "mine", "name": "Ana", "phone": "555" })),
    )
    .await;
    let (_, b) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "id": "mine", "name": "Ana", "phone": "555" })),
    )
    .await;
    assert_ne!(a["user"]["id"], "mine");
    assert_ne!(a["user"]["id"], b["user"]["id"]);
}

#[tokio::test]
async fn test_create_user_validation() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/users", Some(json!({ "name": "Ana" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "value_error");
    assert!(body["detail"][0]["msg"].as_str().unwrap().contains("phone"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Ana", "phone": 555 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/users/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn test_update_unknown_user_creates_it() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/users/fresh-id",
        Some(json!({ "id": "other", "name": "Bo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "fresh-id");
    assert_eq!(body["user"]["name"], "Bo");
    assert!(body["user"]["phone"].is_null());

    let (status, fetched) = send(&app, Method::GET, "/api/users/fresh-id", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Bo");
}

#[tokio::test]
async fn test_update_rejects_mistyped_field() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/users/u1",
        Some(json!({ "hotel_name": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/api/users/u1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sos_lifecycle_scenario() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sos",
        Some(json!({ "user_id": "u1", "latitude": 28.6, "longitude": 77.2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SOS triggered successfully");
    assert_eq!(body["emergency_contacts"].as_array().unwrap().len(), 3);
    let alert_id = body["alert_id"].as_str().unwrap().to_string();

    let (_, active) = send(&app, Method::GET, "/api/sos/active", None).await;
    let alerts = active["active_alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["id"], alert_id.as_str());
    assert_eq!(alerts[0]["status"], "active");
    assert_eq!(alerts[0]["type"], "sos");
    assert!(alerts[0]["timestamp"].is_string());

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/sos/deactivate/{alert_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "SOS deactivated", "alert_id": alert_id })
    );

    let (_, active) = send(&app, Method::GET, "/api/sos/active", None).await;
    assert!(active["active_alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_deactivate_unknown_alert() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/sos",
        Some(json!({ "user_id": "u1", "latitude": 1.0, "longitude": 2.0, "type": "fake_call" })),
    )
    .await;

    let (status, body) = send(&app, Method::POST, "/api/sos/deactivate/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Alert not found" }));

    let (_, active) = send(&app, Method::GET, "/api/sos/active", None).await;
    let alerts = active["active_alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["type"], "fake_call");
}

#[tokio::test]
async fn test_trigger_sos_validation() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/sos",
        Some(json!({ "user_id": "u1", "latitude": 28.6 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, active) = send(&app, Method::GET, "/api/sos/active", None).await;
    assert!(active["active_alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/sos")
                .header(header::ORIGIN, "http://localhost:19006")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = resp.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:19006"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
}

#[tokio::test]
async fn test_trigger_sos_accepts_free_form_type_and_status() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sos",
        Some(json!({ "user_id": "u1", "latitude": 1.0, "longitude": 2.0, "type": "panic" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let panic_id = body["alert_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sos",
        Some(json!({
            "user_id": "u1",
            "latitude": 1.0,
            "longitude": 2.0,
            "status": "pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let pending_id = body["alert_id"].as_str().unwrap().to_string();

    let (_, active) = send(&app, Method::GET, "/api/sos/active", None).await;
    let alerts = active["active_alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["id"], panic_id.as_str());
    assert_eq!(alerts[0]["type"], "panic");

    // Stored even though it never shows as active.
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/sos/deactivate/{pending_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
