use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use redis::AsyncCommands;
use tower::ServiceExt;

use crate::integration::common::setup_test_app;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

fn design_payload() -> serde_json::Value {
    serde_json::json!({
        "jobs": [
            {"title": "Senior UX Designer", "company": "Acme", "url": "https://acme.example/1"},
            {"title": "Product Designer", "company": "Globex"}
        ]
    })
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["cache"], "ok");
}

#[tokio::test]
async fn health_returns_503_when_cache_is_down() {
    let app = setup_test_app().await;
    app.container.stop().await.unwrap();

    let response = app
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["cache"], "error");
}

#[tokio::test]
async fn landing_page_is_html() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn list_all_with_empty_cache_is_empty_array() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/api/jobs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn list_all_joins_categories_in_registry_order() {
    let mut app = setup_test_app().await;
    app.seed_category(
        "backend",
        serde_json::json!({"jobs": [{"title": "Rust Engineer"}]}),
    )
    .await;
    app.seed_category("design", design_payload()).await;
    let _: () = app.seed.rpush("categories", "missing").await.unwrap();

    let response = app
        .router
        .oneshot(Request::get("/api/jobs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let collections = json.as_array().unwrap();
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0]["category"], "backend");
    assert_eq!(collections[1]["category"], "design");
    assert_eq!(collections[1]["jobs"][0]["company"], "Acme");
    assert_eq!(collections[1]["jobs"][0]["applicants"], 0);
}

#[tokio::test]
async fn list_by_category_returns_single_element_array() {
    let mut app = setup_test_app().await;
    app.seed_category("design", design_payload()).await;

    let response = app
        .router
        .oneshot(
            Request::get("/api/categories/design/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let collections = json.as_array().unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0]["jobs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_by_unknown_category_returns_404_text() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/api/categories/design/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_text(response).await, "not found");
}

#[tokio::test]
async fn get_job_by_identifier() {
    let mut app = setup_test_app().await;
    app.seed_category("design", design_payload()).await;
    let _: () = app
        .seed
        .set("applicants:senior-ux-designer", 7)
        .await
        .unwrap();

    let response = app
        .router
        .oneshot(
            Request::get("/api/jobs/design--senior-ux-designer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Senior UX Designer");
    assert_eq!(json["applicants"], 7);
    assert_eq!(json["url"], "https://acme.example/1");
}

#[tokio::test]
async fn get_unknown_job_returns_404_text() {
    let mut app = setup_test_app().await;
    app.seed_category("design", design_payload()).await;

    for uri in [
        "/api/jobs/design--staff-engineer",
        "/api/jobs/backend--senior-ux-designer",
        "/api/jobs/no-separator-here",
    ] {
        let response = app
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_text(response).await, "not found");
    }
}

#[tokio::test]
async fn senior_ux_designer_scenario() {
    let mut app = setup_test_app().await;
    app.seed_category(
        "design",
        serde_json::json!({"jobs": [{"title": "Senior UX Designer", "applicants": 0}]}),
    )
    .await;

    // List all
    let response = app
        .router
        .clone()
        .oneshot(Request::get("/api/jobs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["jobs"][0]["title"], "Senior UX Designer");

    // Get by identifier
    let response = app
        .router
        .clone()
        .oneshot(
            Request::get("/api/jobs/design--senior-ux-designer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["applicants"], 0);

    // Apply
    let response = app
        .router
        .clone()
        .oneshot(
            Request::post("/api/jobs/design--senior-ux-designer/apply")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Senior UX Designer");
    assert_eq!(json["applicants"], 1);

    let stored: i64 = app.seed.get("applicants:senior-ux-designer").await.unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn apply_to_unknown_job_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::post("/api/jobs/design--senior-ux-designer/apply")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn corrupt_counter_returns_500_json() {
    let mut app = setup_test_app().await;
    app.seed_category("design", design_payload()).await;
    let _: () = app
        .seed
        .set("applicants:senior-ux-designer", "many")
        .await
        .unwrap();

    let response = app
        .router
        .oneshot(
            Request::get("/api/jobs/design--senior-ux-designer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "corrupt_value");
}

#[tokio::test]
async fn openapi_document_lists_job_routes() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/api/jobs"].is_object());
    assert!(json["paths"]["/api/jobs/{id}/apply"].is_object());
}
