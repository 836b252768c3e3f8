//! HTTP surface the wizard front end calls. Handlers are thin: they
//! normalize incoming identifiers and hand everything to the pure engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::normalize::normalize_touchpoint_id;
use crate::catalog::{JourneyPhase, ModuleDefinition};
use crate::recommendation::{
    DepthRecommendation, DiscoverySelection, RecommendationEngine, RecommendationResult,
};

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub engine: Arc<RecommendationEngine>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .with_state(state)
}

/// Wire shape of a discovery submission. Identifiers may still be legacy
/// ones from an old saved session; they are normalized here, before the
/// engine sees them.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub touchpoints: Vec<String>,
    #[serde(default)]
    pub sub_touchpoints: Vec<String>,
    pub industry: String,
    #[serde(default)]
    pub service_type: String,
}

impl RecommendationRequest {
    fn into_selection(self) -> DiscoverySelection {
        DiscoverySelection {
            selected_touchpoint_ids: self
                .touchpoints
                .iter()
                .map(|id| normalize_touchpoint_id(id).to_string())
                .collect(),
            selected_sub_touchpoint_ids: self
                .sub_touchpoints
                .iter()
                .map(|id| normalize_touchpoint_id(id).to_string())
                .collect(),
            industry_id: self.industry,
            service_type_id: self.service_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: RecommendationResult,
    pub depth: DepthRecommendation,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub phases: Vec<JourneyPhase>,
    pub modules: Vec<ModuleDefinition>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = state.engine.catalog();
    Json(CatalogResponse {
        phases: catalog.phases().to_vec(),
        modules: catalog.modules().to_vec(),
    })
}

pub(crate) async fn recommendations_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let selection = payload.into_selection();
    let recommendation = state.engine.recommend(&selection);
    let depth = state.engine.depth(&selection.selected_touchpoint_ids);

    Json(RecommendationResponse {
        recommendation,
        depth,
    })
}
