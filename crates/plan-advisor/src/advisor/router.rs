use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::UserInput;
use super::estimation::RecommendationEngine;
use super::questionnaire::{Questionnaire, QuestionnaireAnswers};
use super::AdvisorError;

/// Router builder exposing the questionnaire, catalog, and recommendation endpoints.
pub fn advisor_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .route("/api/v1/plans", get(plans_handler))
        .route("/api/v1/plans/:plan_id", get(plan_handler))
        .route("/api/v1/plans/:plan_id/estimate", get(estimate_handler))
        .route(
            "/api/v1/recommendations",
            get(recommendations_query_handler).post(recommendations_submit_handler),
        )
        .with_state(engine)
}

/// Query-string answers. Missing parameters fall back to the questionnaire's starting
/// selections; present values are still validated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnswersQuery {
    coverage_type: Option<String>,
    expected_visits: Option<String>,
    prescription_tier: Option<String>,
    planned_procedures: Option<String>,
    risk_tolerance: Option<String>,
    hsa_interest: Option<String>,
}

impl AnswersQuery {
    pub(crate) fn into_answers(self) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            coverage_type: self.coverage_type.unwrap_or_else(|| "individual".to_string()),
            expected_visits: self.expected_visits.unwrap_or_else(|| "medium".to_string()),
            prescription_tier: self.prescription_tier.unwrap_or_else(|| "none".to_string()),
            planned_procedures: self.planned_procedures.unwrap_or_else(|| "none".to_string()),
            risk_tolerance: self
                .risk_tolerance
                .unwrap_or_else(|| "predictable".to_string()),
            hsa_interest: self.hsa_interest.unwrap_or_else(|| "unsure".to_string()),
        }
    }
}

pub(crate) async fn questionnaire_handler() -> Json<Questionnaire> {
    Json(Questionnaire::standard())
}

pub(crate) async fn plans_handler(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    (StatusCode::OK, Json(engine.catalog().comparison())).into_response()
}

pub(crate) async fn plan_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Path(plan_id): Path<String>,
) -> Response {
    match engine.get_plan_by_id(&plan_id) {
        Some(plan) => (StatusCode::OK, Json(plan)).into_response(),
        None => error_response(AdvisorError::PlanNotFound(plan_id)),
    }
}

pub(crate) async fn estimate_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Path(plan_id): Path<String>,
    Query(query): Query<AnswersQuery>,
) -> Response {
    match engine.estimate_plan(&plan_id, &query.into_answers()) {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_query_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Query(query): Query<AnswersQuery>,
) -> Response {
    recommendation_response(&engine, &query.into_answers())
}

pub(crate) async fn recommendations_submit_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(answers): Json<QuestionnaireAnswers>,
) -> Response {
    recommendation_response(&engine, &answers)
}

fn recommendation_response(
    engine: &RecommendationEngine,
    answers: &QuestionnaireAnswers,
) -> Response {
    match UserInput::try_from(answers) {
        Ok(input) => (StatusCode::OK, Json(engine.report(&input))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AdvisorError) -> Response {
    let status = match &error {
        AdvisorError::InvalidInput { field, value } => {
            warn!(field, value = value.as_str(), "rejected questionnaire answers");
            StatusCode::BAD_REQUEST
        }
        AdvisorError::PlanNotFound(_) => StatusCode::NOT_FOUND,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
