use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::domain::{CalculatorInputs, EducationPath, LivingCost, LocationProfile, SchoolTier};
use super::report::{CalculationError, ScamScoreEngine};

/// Body for the side-by-side comparison endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonRequest {
    pub first: CalculatorInputs,
    pub second: CalculatorInputs,
}

/// Everything a form needs to populate its dropdowns.
#[derive(Debug, Serialize)]
pub struct CatalogListing<'a> {
    pub paths: Vec<&'a EducationPath>,
    pub locations: Vec<&'a LocationProfile>,
    pub school_tiers: Vec<&'a SchoolTier>,
    pub living_costs: Vec<&'a LivingCost>,
}

/// Router builder exposing the calculator over HTTP.
pub fn calculator_router(engine: Arc<ScamScoreEngine>) -> Router {
    Router::new()
        .route("/api/v1/calculate", post(calculate_handler))
        .route("/api/v1/compare", post(compare_handler))
        .route("/api/v1/paths", get(paths_handler))
        .route("/api/v1/paths/:path_id", get(path_handler))
        .with_state(engine)
}

pub(crate) async fn calculate_handler(
    State(engine): State<Arc<ScamScoreEngine>>,
    Json(inputs): Json<CalculatorInputs>,
) -> Response {
    match engine.evaluate(&inputs) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => calculation_error_response(error),
    }
}

pub(crate) async fn compare_handler(
    State(engine): State<Arc<ScamScoreEngine>>,
    Json(request): Json<ComparisonRequest>,
) -> Response {
    match engine.compare(&request.first, &request.second) {
        Ok(comparison) => (StatusCode::OK, Json(comparison)).into_response(),
        Err(error) => calculation_error_response(error),
    }
}

pub(crate) async fn paths_handler(State(engine): State<Arc<ScamScoreEngine>>) -> Response {
    let catalog = engine.catalog();
    let listing = CatalogListing {
        paths: catalog.paths().collect(),
        locations: catalog.locations().collect(),
        school_tiers: catalog.school_tiers().collect(),
        living_costs: catalog.living_costs().collect(),
    };
    (StatusCode::OK, Json(listing)).into_response()
}

pub(crate) async fn path_handler(
    State(engine): State<Arc<ScamScoreEngine>>,
    Path(path_id): Path<String>,
) -> Response {
    match engine.catalog().path(&path_id) {
        Some(path) => (StatusCode::OK, Json(path)).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown education path '{path_id}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

fn calculation_error_response(error: CalculationError) -> Response {
    info!(%error, "calculation rejected");
    match error {
        CalculationError::Validation(details) => {
            let payload = json!({
                "error": "invalid calculator inputs",
                "details": details,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        CalculationError::UnknownPath(path) => {
            let payload = json!({
                "error": format!("unknown education path '{path}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
