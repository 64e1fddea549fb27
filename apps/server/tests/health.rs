mod common;

use axum::http::StatusCode;
use common::{build_test_router, get};

#[tokio::test]
async fn healthz_and_readyz_report_ok() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = get(&app, "/api/v1/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = get(&app, "/api/v1/readyz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn openapi_lists_the_slug_endpoint() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = get(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/taxons/generate-slug"].is_object());
}
