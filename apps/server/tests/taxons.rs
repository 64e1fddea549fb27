mod common;

use axum::{http::Method, http::StatusCode, Router};
use common::{build_test_router, get, send};
use serde_json::json;

async fn create(app: &Router, code: &str, parent_code: Option<&str>, name: &str) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/taxons",
        Some(json!({
            "code": code,
            "parentCode": parent_code,
            "translations": [{ "locale": "en_US", "name": name }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create {code}: {body}");
}

#[tokio::test]
async fn generates_root_slug() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = get(&app, "/api/v1/taxons/generate-slug?name=Shoes&locale=en_US").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "slug": "shoes" }));
}

#[tokio::test]
async fn blank_name_is_a_bad_request() {
    let (_tmp, app) = build_test_router().await;

    for uri in [
        "/api/v1/taxons/generate-slug?name=&locale=en_US",
        "/api/v1/taxons/generate-slug?name=%20%20",
        "/api/v1/taxons/generate-slug?locale=en_US",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Cannot generate slug without a name");
    }
}

#[tokio::test]
async fn unknown_parent_code_is_ignored() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = get(
        &app,
        "/api/v1/taxons/generate-slug?name=Shoes&locale=en_US&parentCode=nope",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "shoes");
}

#[tokio::test]
async fn child_slug_is_prefixed_with_parent_slug() {
    let (_tmp, app) = build_test_router().await;
    create(&app, "category", None, "Category").await;
    create(&app, "men", Some("category"), "Men").await;

    let (status, body) = get(
        &app,
        "/api/v1/taxons/generate-slug?name=Running%20Shoes&locale=en_US&parentCode=men",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "category/men/running-shoes");

    // same input, same output; nothing was persisted
    let (_, again) = get(
        &app,
        "/api/v1/taxons/generate-slug?name=Running%20Shoes&locale=en_US&parentCode=men",
    )
    .await;
    assert_eq!(again, body);
    let (_, all) = get(&app, "/api/v1/taxons").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_locale_falls_back_to_default_locale_for_parent() {
    let (_tmp, app) = build_test_router().await;
    create(&app, "category", None, "Category").await;

    let (status, body) = get(
        &app,
        "/api/v1/taxons/generate-slug?name=Schuhe&parentCode=category",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "category/schuhe");
}

#[tokio::test]
async fn taxon_crud_round() {
    let (_tmp, app) = build_test_router().await;
    create(&app, "category", None, "Category").await;
    create(&app, "shoes", Some("category"), "Shoes").await;

    let (status, body) = get(&app, "/api/v1/taxons/shoes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translations"][0]["slug"], "category/shoes");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/taxons",
        Some(json!({
            "code": "shoes-2",
            "parentCode": "category",
            "translations": [{ "locale": "en_US", "name": "Shoes" }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/taxons/category", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, "/api/v1/taxons/shoes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn padded_parent_code_is_an_unknown_parent() {
    let (_tmp, app) = build_test_router().await;
    create(&app, "category", None, "Category").await;

    let (status, body) = get(
        &app,
        "/api/v1/taxons/generate-slug?name=Shoes&locale=en_US&parentCode=%20category%20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "shoes");
}
