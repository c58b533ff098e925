//! HTTP tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblio::api::create_router;

use crate::app_state;

async fn app() -> Router {
    create_router(app_state().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).expect("Failed to parse response");
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let (status, body) = send_json(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send_json(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = app().await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({"book_id": 1, "name": "Dune", "author": "Herbert", "count": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dune");
    assert_eq!(body["count"], 3);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/books/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_negative_count_is_rejected() {
    let app = app().await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({"book_id": 1, "name": "Dune", "author": "Herbert", "count": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_client_conflicts() {
    let app = app().await;
    let alice = json!({"client_id": 10, "name": "Alice"});

    let (status, _) = send_json(&app, Method::POST, "/api/v1/clients", Some(alice.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send_json(&app, Method::POST, "/api/v1/clients", Some(alice)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/clients", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_rent_and_return() {
    let app = app().await;
    send_json(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({"book_id": 1, "name": "Dune", "author": "Herbert", "count": 3})),
    )
    .await;
    send_json(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({"client_id": 10, "name": "Alice"})),
    )
    .await;

    let (status, rent) = send_json(
        &app,
        Method::POST,
        "/api/v1/rents",
        Some(json!({"client_id": 10, "book_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(rent["returned"], false);
    let rent_id = rent["rent_id"].as_i64().expect("No rent ID");

    let (status, rents) = send_json(&app, Method::GET, "/api/v1/clients/10/rents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rents[0]["book_id"], 1);

    let uri = format!("/api/v1/rents/{}/return", rent_id);
    let (status, returned) = send_json(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["returned"], true);

    let (status, _) = send_json(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_rent_of_unknown_book() {
    let app = app().await;
    send_json(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({"client_id": 10, "name": "Alice"})),
    )
    .await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/rents",
        Some(json!({"client_id": 10, "book_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "UnknownReference");
}

#[tokio::test]
async fn test_rents_of_unknown_client() {
    let app = app().await;

    let (status, _) = send_json(&app, Method::GET, "/api/v1/clients/99/rents", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clients_page_lists_clients() {
    let app = app().await;
    send_json(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({"client_id": 10, "name": "Alice"})),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/clients", None).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).expect("Page is not UTF-8");
    assert!(html.contains("<td>Alice</td>"));

    let (status, _) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_rent_before_and_after_return() {
    let app = app().await;
    send_json(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({"book_id": 1, "name": "Dune", "author": "Herbert", "count": 3})),
    )
    .await;
    send_json(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({"client_id": 10, "name": "Alice"})),
    )
    .await;

    let (_, rent) = send_json(
        &app,
        Method::POST,
        "/api/v1/rents",
        Some(json!({"client_id": 10, "book_id": 1})),
    )
    .await;
    let rent_id = rent["rent_id"].as_i64().expect("No rent ID");
    let uri = format!("/api/v1/rents/{}", rent_id);

    let (status, fetched) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["client_id"], 10);
    assert_eq!(fetched["book_id"], 1);
    assert_eq!(fetched["returned"], false);
    assert!(fetched["returned_at"].is_null());

    let return_uri = format!("/api/v1/rents/{}/return", rent_id);
    let (status, _) = send_json(&app, Method::POST, &return_uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["returned"], true);
    assert!(fetched["returned_at"].is_string());
}

#[tokio::test]
async fn test_unknown_rent_is_not_found() {
    let app = app().await;

    let (status, body) = send_json(&app, Method::GET, "/api/v1/rents/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");

    let (status, _) = send_json(&app, Method::POST, "/api/v1/rents/404/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/static/style.css", None).await;
    assert_eq!(status, StatusCode::OK);

    let css = String::from_utf8(body).expect("Stylesheet is not UTF-8");
    assert!(css.contains("border-collapse"));
}
