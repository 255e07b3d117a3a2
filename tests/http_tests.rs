use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use contactlist::db::{schema, Database};
use contactlist::http::{HttpServer, HttpServerConfig};

fn setup() -> Router {
    HttpServer::with_config(HttpServerConfig::default(), Database::new(schema::test_connection()))
        .router()
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn create(router: &Router, body: Value) -> Value {
    let (status, json) = send(router, Method::POST, "/contactlist", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    json
}

// ==========================================================================
// LIST
// ==========================================================================

#[tokio::test]
async fn list_empty_returns_empty_array() {
    let router = setup();
    let (status, json) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

// ==========================================================================
// CREATE
// ==========================================================================

#[tokio::test]
async fn create_returns_contact_with_id() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana", "email": "a@x.com", "number": "555" })).await;

    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["email"], "a@x.com");
    assert_eq!(created["number"], "555");
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn create_name_only_has_null_fields() {
    let router = setup();
    create(&router, json!({ "name": "Bo" })).await;

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list[0]["name"], "Bo");
    assert!(list[0]["email"].is_null());
    assert!(list[0]["number"].is_null());
}

#[tokio::test]
async fn create_without_name_is_bad_request() {
    let router = setup();
    let (status, json) =
        send(&router, Method::POST, "/contactlist", Some(json!({ "email": "a@x.com" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
    assert_eq!(json["error"], "name is required");

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let router = setup();
    let created = create(&router, json!({ "id": 500, "name": "Ana" })).await;
    assert_ne!(created["id"], 500);
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let router = setup();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/contactlist")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], 400);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn create_stores_numeric_number_as_text() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana", "number": 5551234 })).await;
    assert_eq!(created["number"], "5551234");

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list[0]["number"], "5551234");
}

#[tokio::test]
async fn create_with_object_field_is_bad_request() {
    let router = setup();
    let (status, json) = send(
        &router,
        Method::POST,
        "/contactlist",
        Some(json!({ "name": "Ana", "email": { "home": "a@x.com" } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list, json!([]));
}

// ==========================================================================
// UPDATE
// ==========================================================================

#[tokio::test]
async fn update_name_reports_one_and_keeps_other_fields() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana", "email": "a@x.com", "number": "555" })).await;
    let id = created["id"].as_i64().unwrap();

    let (status, json) = send(
        &router,
        Method::PUT,
        &format!("/contactlist/{}", id),
        Some(json!({ "name": "Anna" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "updated": 1 }));

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list[0]["name"], "Anna");
    assert_eq!(list[0]["email"], "a@x.com");
    assert_eq!(list[0]["number"], "555");
}

#[tokio::test]
async fn update_nonexistent_reports_zero() {
    let router = setup();
    let (status, json) =
        send(&router, Method::PUT, "/contactlist/999", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "updated": 0 }));

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_null_name_is_bad_request() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana" })).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("/contactlist/{}", id),
        Some(json!({ "name": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_stores_numeric_number_as_text() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana", "number": "555" })).await;
    let id = created["id"].as_i64().unwrap();

    let (status, json) = send(
        &router,
        Method::PUT,
        &format!("/contactlist/{}", id),
        Some(json!({ "number": 5550000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "updated": 1 }));

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list[0]["name"], "Ana");
    assert_eq!(list[0]["number"], "5550000");
}

#[tokio::test]
async fn update_with_malformed_json_is_bad_request() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana" })).await;
    let id = created["id"].as_i64().unwrap();

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/contactlist/{}", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list[0]["name"], "Ana");
}

#[tokio::test]
async fn update_with_non_integer_id_is_rejected() {
    let router = setup();
    let (status, _) =
        send(&router, Method::PUT, "/contactlist/abc", Some(json!({ "name": "X" }))).await;
    assert!(status.is_client_error());
}

// ==========================================================================
// DELETE
// ==========================================================================

#[tokio::test]
async fn delete_reports_one_then_zero() {
    let router = setup();
    let created = create(&router, json!({ "name": "Ana" })).await;
    let uri = format!("/contactlist/{}", created["id"]);

    let (status, json) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "deleted": 1 }));

    let (_, list) = send(&router, Method::GET, "/contactlist", None).await;
    assert_eq!(list, json!([]));

    let (_, json) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(json, json!({ "deleted": 0 }));
}

// ==========================================================================
// AMBIENT
// ==========================================================================

#[tokio::test]
async fn health_reports_ok() {
    let router = setup();
    let (status, json) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let router = setup();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/contactlist")
        .header(header::ORIGIN, "http://localhost:4200")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
