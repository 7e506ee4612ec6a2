// Re-export the proto module from the shared `api-shared` crate so callers
// can reference `api_grpc::pb`.
pub use api_shared::pb;

use api_shared::auth;
use api_shared::pb::{
    mcdonald_server::Mcdonald, ClassifyReq, CompareReq, HealthRes, ScenarioComparison, Verdict,
};
use api_shared::{findings_from_pb, scenario_override_from_pb, HealthService};
use tonic::{Request, Response, Status};

/// Authentication interceptor for gRPC requests
#[allow(clippy::result_large_err)]
pub fn auth_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    let api_key = req
        .metadata()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| Status::unauthenticated("Missing x-api-key header"))?;

    auth::validate_api_key(api_key)?;
    Ok(req)
}

/// gRPC front end for the classifier. Holds no state.
#[derive(Default, Clone)]
pub struct McdonaldService;

#[allow(clippy::result_large_err)]
fn decode_findings(findings: Option<pb::Findings>) -> Result<mcdonald_core::Findings, Status> {
    findings_from_pb(findings.unwrap_or_default())
        .map_err(|e| Status::invalid_argument(e.to_string()))
}

#[tonic::async_trait]
impl Mcdonald for McdonaldService {
    async fn health(&self, _req: Request<()>) -> Result<Response<HealthRes>, Status> {
        Ok(Response::new(HealthService::check_health()))
    }

    async fn classify(&self, req: Request<ClassifyReq>) -> Result<Response<Verdict>, Status> {
        let req = req.into_inner();
        let findings = decode_findings(req.findings)?;

        let verdict = match scenario_override_from_pb(&req.scenario_override) {
            Some(scenario) => mcdonald_core::classify_as(&findings, scenario),
            None => mcdonald_core::classify(&findings),
        };
        tracing::info!("classify: {}", verdict.status);

        Ok(Response::new(verdict.into()))
    }

    async fn compare(
        &self,
        req: Request<CompareReq>,
    ) -> Result<Response<ScenarioComparison>, Status> {
        let findings = decode_findings(req.into_inner().findings)?;
        let comparison = mcdonald_core::compare_scenarios(&findings);
        tracing::info!(
            "compare: cis={} ris={} progressive={}",
            comparison.cis.status,
            comparison.ris.status,
            comparison.progressive.status
        );

        Ok(Response::new(comparison.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(scenario: &str, locations: &[&str]) -> pb::Findings {
        pb::Findings {
            scenario: scenario.into(),
            locations: locations.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn classify_returns_verdict() {
        let req = ClassifyReq {
            findings: Some(pb::Findings {
                has_csf: true,
                ..findings("cis", &["periventricular", "infratentorial"])
            }),
            scenario_override: String::new(),
        };
        let verdict = McdonaldService
            .classify(Request::new(req))
            .await
            .expect("classify")
            .into_inner();
        assert_eq!(verdict.status, "MS");
        assert_eq!(verdict.title, "Relapsing MS");
    }

    #[tokio::test]
    async fn classify_honours_scenario_override() {
        let req = ClassifyReq {
            findings: Some(findings("cis", &["spinal_cord"])),
            scenario_override: "ris".into(),
        };
        let verdict = McdonaldService
            .classify(Request::new(req))
            .await
            .expect("classify")
            .into_inner();
        assert_eq!(verdict.status, "RIS_HIGH_RISK");
        assert_eq!(verdict.recommendations, vec!["No DIS.", "Monitor clinical/MRI."]);
    }

    #[tokio::test]
    async fn missing_findings_fall_back_to_no_diagnosis() {
        let verdict = McdonaldService
            .classify(Request::new(ClassifyReq::default()))
            .await
            .expect("classify")
            .into_inner();
        assert_eq!(verdict.status, "NO_MS");
        assert!(verdict.recommendations.is_empty());
    }

    #[tokio::test]
    async fn unknown_location_is_invalid_argument() {
        let req = ClassifyReq {
            findings: Some(findings("cis", &["thalamus"])),
            scenario_override: String::new(),
        };
        let status = McdonaldService
            .classify(Request::new(req))
            .await
            .expect_err("should reject");
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn compare_forces_progression() {
        let req = CompareReq {
            findings: Some(pb::Findings {
                has_dit: true,
                ..findings("", &["periventricular", "optic_nerve"])
            }),
        };
        let comparison = McdonaldService
            .compare(Request::new(req))
            .await
            .expect("compare")
            .into_inner();
        let progressive = comparison.progressive.expect("progressive verdict");
        assert_eq!(progressive.status, "MS");
        assert_eq!(comparison.ris.map(|v| v.status), Some("MS".to_string()));
    }

    #[test]
    fn interceptor_requires_header() {
        let status = auth_interceptor(Request::new(())).expect_err("should reject");
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }
}
