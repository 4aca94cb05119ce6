use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use serde_json::Value;

use crate::advisor::catalog::PlanCatalog;
use crate::advisor::domain::{
    CoverageType, ExpectedVisits, HealthPlan, HsaInterest, PlannedProcedures, PrescriptionTier,
    RiskTolerance, UserInput,
};
use crate::advisor::estimation::{CostDistribution, RecommendationEngine};
use crate::advisor::questionnaire::QuestionnaireAnswers;
use crate::advisor::router::advisor_router;

/// Low-usage single member who wants predictable costs and no HSA.
pub(super) fn baseline_input() -> UserInput {
    UserInput {
        coverage_type: CoverageType::Individual,
        expected_visits: ExpectedVisits::Low,
        prescription_tier: PrescriptionTier::None,
        planned_procedures: PlannedProcedures::None,
        risk_tolerance: RiskTolerance::Predictable,
        hsa_interest: HsaInterest::No,
    }
}

/// Moderate visits plus a planned major surgery.
pub(super) fn surgery_input(coverage_type: CoverageType) -> UserInput {
    UserInput {
        coverage_type,
        expected_visits: ExpectedVisits::Medium,
        prescription_tier: PrescriptionTier::None,
        planned_procedures: PlannedProcedures::Major,
        risk_tolerance: RiskTolerance::Predictable,
        hsa_interest: HsaInterest::Unsure,
    }
}

/// Heavy user on every dimension.
pub(super) fn heavy_user_input() -> UserInput {
    UserInput {
        coverage_type: CoverageType::Individual,
        expected_visits: ExpectedVisits::High,
        prescription_tier: PrescriptionTier::Specialty,
        planned_procedures: PlannedProcedures::Major,
        risk_tolerance: RiskTolerance::Predictable,
        hsa_interest: HsaInterest::Yes,
    }
}

pub(super) fn raw_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers::from(baseline_input())
}

pub(super) fn reference_plan(plan_id: &str) -> HealthPlan {
    PlanCatalog::standard()
        .get_plan_by_id(plan_id)
        .cloned()
        .expect("reference plan present")
}

pub(super) fn distribution(input: &UserInput) -> CostDistribution {
    CostDistribution::for_catalog(&PlanCatalog::standard(), input)
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(PlanCatalog::standard())
}

pub(super) fn advisor_router_with_catalog(catalog: PlanCatalog) -> axum::Router {
    advisor_router(Arc::new(RecommendationEngine::new(catalog)))
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
