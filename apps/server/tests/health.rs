mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn healthz_works() {
    let app = common::spawn_app().await;

    let (status, body) = app.request(Method::GET, "/api/v1/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = app.request(Method::GET, "/api/v1/readyz", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = common::spawn_app().await;

    let (status, body) = app.request(Method::GET, "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/expenses"].is_object());
    assert!(body["paths"]["/api/v1/budget"].is_object());
}
