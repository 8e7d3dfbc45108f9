use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, router, Directory, Resident};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn rpc(uri: &str, body: Value) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn login_body(password: &str) -> Value {
    json!({
        "method": "login",
        "params": {
            "aUserID": "JD@SilverMeadows",
            "aPassword": password,
            "aApplicationKey": "demo-key"
        }
    })
}

/// Seeded directory with one open session, shared with the router.
fn with_session() -> (Arc<RwLock<Directory>>, String) {
    let mut directory = Directory::seeded();
    let session = directory.open_session("JD@SilverMeadows");
    (Arc::new(RwLock::new(directory)), session)
}

// --- login controller ---

#[tokio::test]
async fn login_returns_session() {
    let resp = app().oneshot(rpc("/api/login", login_body("secret"))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let info: Value = body_json(resp).await;
    assert_eq!(info["firstName"], "John");
    assert_eq!(info["userID"], 12);
    assert!(!info["sessionID"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401_message() {
    let resp = app().oneshot(rpc("/api/login", login_body("nope"))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "message": "Invalid user or password" }));
}

#[tokio::test]
async fn login_without_params_returns_400() {
    let resp = app()
        .oneshot(rpc("/api/login", json!({ "method": "login" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn connections_are_served_on_capitalised_path() {
    let (state, _) = with_session();
    let resp = router(state)
        .oneshot(rpc("/api/Login", json!({ "method": "connections" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let names: Vec<String> = body_json(resp).await;
    assert_eq!(names, vec!["JD@SilverMeadows"]);
}

#[tokio::test]
async fn databases_require_lowercase_session_key() {
    let (state, session) = with_session();
    let resp = router(state)
        .oneshot(rpc(
            "/api/login",
            json!({ "method": "GetWZDatabases", "params": { "sessionid": session } }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let dbs: Vec<Value> = body_json(resp).await;
    assert_eq!(dbs[0]["dbDisplayName"], "SilverMeadows");
}

// --- data controller ---

#[tokio::test]
async fn unknown_session_returns_401() {
    let resp = app()
        .oneshot(rpc(
            "/api/wzs",
            json!({ "method": "GetResidents", "params": { "SessionID": "stale" } }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Session expired");
}

#[tokio::test]
async fn residents_honour_active_filter() {
    let (state, session) = with_session();
    let resp = router(state)
        .oneshot(rpc(
            "/api/wzs",
            json!({ "method": "GetResidents", "params": { "SessionID": session, "Active": true } }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let residents: Vec<Resident> = body_json(resp).await;
    let ids: Vec<i32> = residents.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

#[tokio::test]
async fn residents_honour_department_and_room_filters() {
    let (state, session) = with_session();
    let resp = router(state)
        .oneshot(rpc(
            "/api/wzs",
            json!({
                "method": "GetResidents",
                "params": { "SessionID": session, "DepartmentID": 2, "RoomID": 202 }
            }),
        ))
        .await
        .unwrap();

    let residents: Vec<Resident> = body_json(resp).await;
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0].id, 7);
    assert!(!residents[0].active);
}

#[tokio::test]
async fn department_list_returns_seed() {
    let (state, session) = with_session();
    let resp = router(state)
        .oneshot(rpc(
            "/api/wzs",
            json!({ "method": "GetDepartmentList", "params": { "SessionID": session } }),
        ))
        .await
        .unwrap();

    let departments: Vec<Value> = body_json(resp).await;
    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0]["Description"], "Gelijkvloers");
    assert!(departments[1]["Phone"].is_null());
}

#[tokio::test]
async fn mark_communication_as_read_updates_state() {
    let (state, session) = with_session();
    let resp = router(state.clone())
        .oneshot(rpc(
            "/api/wzs",
            json!({
                "method": "MarkCommunicationAsRead",
                "params": { "SessionID": session, "CommunicationID": 101, "Read": true }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
    let directory = state.read().await;
    assert_eq!(directory.is_read(101), Some(true));
    assert_eq!(directory.is_read(100), Some(false));
}

#[tokio::test]
async fn mark_unknown_communication_returns_404() {
    let (state, session) = with_session();
    let resp = router(state)
        .oneshot(rpc(
            "/api/wzs",
            json!({
                "method": "MarkCommunicationAsRead",
                "params": { "SessionID": session, "CommunicationID": 9999, "Read": true }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_method_returns_400() {
    let (state, session) = with_session();
    let resp = router(state)
        .oneshot(rpc(
            "/api/wzs",
            json!({ "method": "GetWounds", "params": { "SessionID": session } }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Unknown method GetWounds");
}

#[tokio::test]
async fn fail_method_returns_500_on_both_controllers() {
    for uri in ["/api/login", "/api/wzs"] {
        let resp = app()
            .oneshot(rpc(uri, json!({ "method": "__fail" })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body: Value = body_json(resp).await;
        assert_eq!(body["message"], "Simulated server failure");
    }
}

#[tokio::test]
async fn envelope_without_method_is_rejected() {
    let resp = app()
        .oneshot(rpc("/api/wzs", json!({ "params": {} })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- full session lifecycle ---

#[tokio::test]
async fn login_then_fetch_residents() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(rpc("/api/login", login_body("secret")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let info: Value = body_json(resp).await;
    let session = info["sessionID"].as_str().unwrap().to_string();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(rpc(
            "/api/wzs",
            json!({ "method": "GetResidents", "params": { "SessionID": session } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let residents: Vec<Resident> = body_json(resp).await;
    assert_eq!(residents.len(), 4);
    assert_eq!(residents[1].call_name.as_deref(), Some("Jef, \"de smid\""));
}
