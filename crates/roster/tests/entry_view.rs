//! Entry view tests.
//!
//! These drive the full router with a lazily connected pool: the entry view,
//! health check, and OpenAPI document never touch the database, so no live
//! PostgreSQL instance is required.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use roster::create_router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn test_router() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/roster_test")
        .expect("Failed to build lazy pool");
    create_router(pool, "./assets".to_string())
}

async fn get_body(uri: &str) -> (axum::http::response::Parts, String) {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    (parts, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Pulls the value out of `<meta name="csrf-token" content="...">`.
fn extract_meta_token(html: &str) -> &str {
    let marker = r#"name="csrf-token" content=""#;
    let start = html.find(marker).expect("csrf-token meta tag present") + marker.len();
    let end = html[start..].find('"').expect("meta tag closed") + start;
    &html[start..end]
}

#[tokio::test]
async fn test_entry_view_has_single_mount_point() {
    let (parts, html) = get_body("/").await;

    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(html.matches(r#"<div id="app""#).count(), 1);
    assert_eq!(html.matches("<user-table>").count(), 1);
}

#[tokio::test]
async fn test_entry_view_references_exactly_two_assets() {
    let (_, html) = get_body("/").await;

    assert_eq!(html.matches("/css/app.css").count(), 1);
    assert_eq!(html.matches("/js/app.js").count(), 1);
    assert_eq!(html.matches("<link ").count(), 1);
    assert_eq!(html.matches("<script ").count(), 1);
}

#[tokio::test]
async fn test_entry_view_embeds_session_csrf_token() {
    let (parts, html) = get_body("/").await;

    let token = extract_meta_token(&html);
    assert!(!token.is_empty());
    assert_eq!(html.matches(r#"name="csrf-token""#).count(), 1);

    // The embedded token is the same one handed to the browser as a cookie.
    let cookie = parts
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("csrf cookie set on first visit");
    assert!(cookie.contains(token));
}

#[tokio::test]
async fn test_entry_view_is_japanese_locale_html() {
    let (_, html) = get_body("/").await;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="ja">"#));
    assert!(html.contains(r#"<meta charset="UTF-8">"#));
}

#[tokio::test]
async fn test_health_check() {
    let (parts, _) = get_body("/health").await;
    assert_eq!(parts.status, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (parts, body) = get_body("/api-docs/openapi.json").await;

    assert_eq!(parts.status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/api/users"].is_object());
}

#[tokio::test]
async fn test_api_post_without_csrf_token_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"佐藤 花子","email":"hanako@example.com","address":"東京都"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // Rejected by the CSRF layer before any database access.
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
