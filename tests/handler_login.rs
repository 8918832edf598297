mod common;

use axum::http::{StatusCode, header::SET_COOKIE};
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_login_success() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .post("/login")
        .json(&json!({
            "username": "admin",
            "password": "password123"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Logged in");
    assert_eq!(body["username"], "admin");

    let headers = response.headers();
    let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .post("/login")
        .json(&json!({
            "username": "admin",
            "password": "password124"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Invalid credentials."
    );
}

#[tokio::test]
async fn test_login_unknown_username_indistinguishable_from_wrong_password() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let wrong_user = server
        .post("/login")
        .json(&json!({
            "username": "root",
            "password": "password123"
        }))
        .await;

    let wrong_pass = server
        .post("/login")
        .json(&json!({
            "username": "admin",
            "password": "hunter2"
        }))
        .await;

    wrong_user.assert_status(StatusCode::UNAUTHORIZED);
    wrong_pass.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_user.text(), wrong_pass.text());
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    for body in [
        json!({}),
        json!({ "username": "admin" }),
        json!({ "password": "password123" }),
        json!({ "username": "", "password": "password123" }),
        json!({ "username": "admin", "password": "" }),
        json!({ "username": "   ", "password": "password123" }),
    ] {
        let response = server.post("/login").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Username and password are required.");
    }
}

#[tokio::test]
async fn test_login_trims_username() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .post("/login")
        .json(&json!({
            "username": "  admin  ",
            "password": "password123"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["username"], "admin");
}

#[tokio::test]
async fn test_login_non_json_body() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.post("/login").text("definitely not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid request body, JSON expected.");
}

#[tokio::test]
async fn test_login_malformed_json_body() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .post("/login")
        .text("{ this is broken")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid request body, JSON expected.");
}

#[tokio::test]
async fn test_login_wrong_field_types() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .post("/login")
        .json(&json!({ "username": 42, "password": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid request body, JSON expected.");
}
