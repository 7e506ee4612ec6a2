//! # API REST
//!
//! REST API implementation for the McDonald criteria classifier.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

use api_shared::{findings_from_pb, pb, scenario_override_from_pb, HealthService};
use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use mcdonald_core::AnatomicalLocation;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// A selectable anatomical location.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocationInfo {
    pub key: String,
    pub label: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, locations, classify, compare),
    components(schemas(
        pb::HealthRes,
        pb::Findings,
        pb::ClassifyReq,
        pb::CompareReq,
        pb::EvidenceSummary,
        pb::Verdict,
        pb::ScenarioComparison,
        LocationInfo,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with all endpoints, Swagger UI and permissive CORS.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/locations", get(locations))
        .route("/classify", post(classify))
        .route("/compare", post(compare))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
async fn health() -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "Anatomical locations in canonical order", body = [LocationInfo])
    )
)]
/// Lists the anatomical locations a findings record may reference.
async fn locations() -> Json<Vec<LocationInfo>> {
    Json(
        AnatomicalLocation::ALL
            .iter()
            .map(|loc| LocationInfo {
                key: loc.key().to_string(),
                label: loc.label().to_string(),
            })
            .collect(),
    )
}

#[utoipa::path(
    post,
    path = "/classify",
    request_body = pb::ClassifyReq,
    responses(
        (status = 200, description = "Verdict for the findings", body = pb::Verdict),
        (status = 400, description = "Findings reference an unknown location")
    )
)]
/// Classify a findings record
///
/// Evaluates under `scenario_override` when it is set, otherwise under `findings.scenario`.
/// A missing or unrecognised scenario yields the no-diagnosis verdict rather than an error.
///
/// # Errors
/// Returns `400 Bad Request` if a location key is not recognised.
async fn classify(
    Json(req): Json<pb::ClassifyReq>,
) -> Result<Json<pb::Verdict>, (StatusCode, &'static str)> {
    let findings = findings_from_pb(req.findings.unwrap_or_default()).map_err(|e| {
        tracing::warn!("Rejected findings: {}", e);
        (StatusCode::BAD_REQUEST, "Invalid findings")
    })?;

    let verdict = match scenario_override_from_pb(&req.scenario_override) {
        Some(scenario) => mcdonald_core::classify_as(&findings, scenario),
        None => mcdonald_core::classify(&findings),
    };

    Ok(Json(verdict.into()))
}

#[utoipa::path(
    post,
    path = "/compare",
    request_body = pb::CompareReq,
    responses(
        (status = 200, description = "Verdicts under CIS, RIS and progressive hypotheses", body = pb::ScenarioComparison),
        (status = 400, description = "Findings reference an unknown location")
    )
)]
/// Evaluate findings under every clinical scenario
///
/// The progressive verdict assumes one year of progression regardless of the findings.
///
/// # Errors
/// Returns `400 Bad Request` if a location key is not recognised.
async fn compare(
    Json(req): Json<pb::CompareReq>,
) -> Result<Json<pb::ScenarioComparison>, (StatusCode, &'static str)> {
    let findings = findings_from_pb(req.findings.unwrap_or_default()).map_err(|e| {
        tracing::warn!("Rejected findings: {}", e);
        (StatusCode::BAD_REQUEST, "Invalid findings")
    })?;

    Ok(Json(mcdonald_core::compare_scenarios(&findings).into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn classify_single_location_biomarker_rule() {
        let (status, body) = post_json(
            "/classify",
            serde_json::json!({
                "findings": {
                    "scenario": "cis",
                    "locations": ["periventricular"],
                    "has_cvs": true,
                    "has_dit": true
                }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let verdict: pb::Verdict = serde_json::from_slice(&body).unwrap();
        assert_eq!(verdict.status, "MS");
        assert_eq!(verdict.title, "MS (biomarker)");
    }

    #[tokio::test]
    async fn classify_without_scenario_is_no_diagnosis() {
        let (status, body) = post_json("/classify", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::OK);

        let verdict: pb::Verdict = serde_json::from_slice(&body).unwrap();
        assert_eq!(verdict.status, "NO_MS");
        assert!(verdict.recommendations.is_empty());
    }

    #[tokio::test]
    async fn classify_rejects_unknown_location() {
        let (status, _) = post_json(
            "/classify",
            serde_json::json!({ "findings": { "scenario": "ris", "locations": ["pons"] } }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn compare_returns_three_verdicts() {
        let (status, body) = post_json(
            "/compare",
            serde_json::json!({
                "findings": {
                    "locations": ["infratentorial", "spinal_cord"],
                    "has_prl": true
                }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let comparison: pb::ScenarioComparison = serde_json::from_slice(&body).unwrap();
        assert_eq!(comparison.cis.unwrap().status, "MS");
        assert_eq!(comparison.ris.unwrap().status, "RIS_HIGH_RISK");
        assert_eq!(comparison.progressive.unwrap().status, "MS");
    }

    #[tokio::test]
    async fn locations_are_listed_in_canonical_order() {
        let response = router()
            .oneshot(Request::builder().uri("/locations").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let listed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listed.as_array().map(|a| a.len()), Some(5));
        assert_eq!(listed[0]["key"], "periventricular");
    }
}
