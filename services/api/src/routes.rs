use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use scam_score::calculator::{calculator_router, ScamScoreEngine};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) checked_at: DateTime<Utc>,
}

pub(crate) fn with_calculator_routes(engine: Arc<ScamScoreEngine>) -> axum::Router {
    calculator_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        checked_at: Utc::now(),
    })
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use scam_score::catalog::ReferenceCatalog;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn engine() -> Arc<ScamScoreEngine> {
        Arc::new(ScamScoreEngine::new(Arc::new(ReferenceCatalog::standard())))
    }

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = readiness_endpoint(Extension(state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn combined_router_serves_calculator_and_health() {
        let app = with_calculator_routes(engine()).layer(Extension(state(true)));

        let response = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json!({
            "path": "college_tech",
            "location": "usa_average",
            "school_tier": "mid_tier",
            "living_cost": "on_campus",
            "scholarships": 10000,
        });
        let response = app
            .oneshot(
                Request::post("/api/v1/calculate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert!(payload["scam_score"]["total_score"].as_u64().unwrap_or(101) <= 100);
    }
}
