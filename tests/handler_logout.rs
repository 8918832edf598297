mod common;

use axum::http::header::SET_COOKIE;
use axum_test::TestServer;

#[tokio::test]
async fn test_logout_without_session() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.post("/logout").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Logged out"
    );
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    for _ in 0..3 {
        let response = server.post("/logout").await;
        response.assert_status_ok();
    }
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.post("/logout").await;

    let headers = response.headers();
    let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session=;"));
    assert!(cookie.contains("Max-Age=0"));
}
