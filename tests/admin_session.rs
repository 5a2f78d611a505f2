mod common;

use axum::http::{StatusCode, header};
use serde_json::json;
use tempfile::TempDir;

use common::{PASSWORD, USERNAME, get, json_request, login, request, send, test_app};

#[tokio::test]
async fn admin_without_session_redirects_to_login() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(&app, get("/admin", None)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers[header::LOCATION],
        "/admin/login?redirect=/admin"
    );
}

#[tokio::test]
async fn nested_admin_path_is_carried_in_redirect() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(&app, get("/admin/products", Some("admin_session=garbage"))).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers[header::LOCATION],
        "/admin/login?redirect=/admin/products"
    );
}

#[tokio::test]
async fn login_page_path_is_not_gated() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(&app, get("/admin/login", None)).await;

    assert_ne!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn login_lookalike_path_is_gated() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(&app, get("/admin/loginx", None)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers[header::LOCATION],
        "/admin/login?redirect=/admin/loginx"
    );
}

#[tokio::test]
async fn login_sets_signed_session_cookie() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": USERNAME, "password": PASSWORD, "redirect": "/admin/settings" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "success": true, "redirect": "/admin/settings" })
    );
    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=3600"));
    assert!(!cookie.contains(common::SECRET));
}

#[tokio::test]
async fn login_ignores_foreign_redirect() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": USERNAME, "password": PASSWORD, "redirect": "//evil.example" }),
        ),
    )
    .await;

    assert_eq!(response.body["redirect"], "/admin");
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    for body in [
        json!({ "username": USERNAME, "password": "wrong" }),
        json!({ "username": "root", "password": PASSWORD }),
        json!({}),
    ] {
        let response = send(&app, json_request("POST", "/api/admin/login", None, body)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(response.headers.get(header::SET_COOKIE).is_none());
    }
}

#[tokio::test]
async fn dashboard_summarises_catalog_for_logged_in_admin() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;
    let cookie = login(&app).await;

    for name in ["Kilim", "Bukle"] {
        send(
            &app,
            json_request("POST", "/api/products", Some(&cookie), json!({ "name": name })),
        )
        .await;
    }

    let response = send(&app, get("/admin", Some(&cookie))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], USERNAME);
    assert_eq!(response.body["siteName"], "Sarda Tekstil");
    assert_eq!(response.body["productCount"], 2);
    assert_eq!(response.body["recentActivity"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["recentActivity"][0]["message"], "Yeni ürün eklendi: Bukle");
}

#[tokio::test]
async fn logout_clears_cookie() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let response = send(&app, request("POST", "/api/admin/logout", None, None)).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("admin_session=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn health_endpoints_report_ready_storage() {
    let dir = TempDir::new().unwrap();
    let app = test_app(dir.path()).await;

    let live = send(&app, get("/health", None)).await;
    let ready = send(&app, get("/health/ready", None)).await;

    assert_eq!(live.body, json!({ "status": "ok" }));
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["status"], "ready");
}
