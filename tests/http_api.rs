use std::sync::atomic::AtomicBool;
use std::sync::{Arc, OnceLock};

use access_advisor::recommendation::RecommendationEngine;
use access_advisor::server::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_prometheus::PrometheusMetricLayer;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};
use tower::util::ServiceExt;

// The prometheus recorder is process-global, so the handle is created once
// and shared across tests.
fn app() -> Router {
    static HANDLE: OnceLock<Arc<PrometheusHandle>> = OnceLock::new();
    let metrics = HANDLE
        .get_or_init(|| {
            let (_layer, handle) = PrometheusMetricLayer::pair();
            Arc::new(handle)
        })
        .clone();
    router(AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics,
        engine: Arc::new(RecommendationEngine::standard()),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).expect("request builds"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn catalog_endpoint_lists_phases_and_modules() {
    let response = app()
        .oneshot(Request::get("/api/v1/catalog").body(Body::empty()).expect("request builds"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["phases"].as_array().expect("phases array").len(), 4);
    assert_eq!(body["modules"].as_array().expect("modules array").len(), 10);
    assert_eq!(body["phases"][0]["id"], "before-visit");
}

#[tokio::test]
async fn recommendations_endpoint_returns_modules_and_depth() {
    let payload = json!({
        "touchpoints": ["finding-online", "getting-in"],
        "sub_touchpoints": ["entrance-steps"],
        "industry": "retail",
        "service_type": "in-person",
    });

    let response = app()
        .oneshot(
            Request::post("/api/v1/recommendations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let recommended = body["recommendation"]["recommended_modules"]
        .as_array()
        .expect("recommended modules array");
    assert!(!recommended.is_empty());
    assert!(recommended
        .iter()
        .any(|module| module["module_id"] == "approach-entry"));
    assert_eq!(body["depth"]["recommended_depth"], "pulse-check");
    assert!(body["recommendation"]["warnings"].as_array().expect("warnings").is_empty());
}

#[tokio::test]
async fn recommendations_endpoint_handles_empty_selection() {
    let payload = json!({ "industry": "other" });

    let response = app()
        .oneshot(
            Request::post("/api/v1/recommendations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["recommendation"]["warnings"][0]["kind"],
        "no-selection"
    );
    assert!(!body["recommendation"]["recommended_modules"]
        .as_array()
        .expect("recommended modules array")
        .is_empty());
}
