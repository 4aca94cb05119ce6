use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::advisor::catalog::PlanCatalog;

const BASELINE_QUERY: &str = "coverageType=individual&expectedVisits=low&prescriptionTier=none\
&plannedProcedures=none&riskTolerance=predictable&hsaInterest=no";

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn recommendations_query_returns_ranked_report() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .oneshot(get(&format!("/api/v1/recommendations?{BASELINE_QUERY}")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload["top_pick"]["plan_id"], "bronze-hdhp");
    assert_eq!(payload["top_pick"]["estimated_annual_cost"], 2310);
    let plans = payload["plans"].as_array().expect("plans array");
    assert_eq!(plans.len(), 4);
    assert_eq!(plans[3]["plan_id"], "platinum-ppo");
    assert_eq!(plans[3]["ranking"], 4);
}

#[tokio::test]
async fn missing_query_parameters_use_questionnaire_defaults() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .oneshot(get("/api/v1/recommendations"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload["answers"]["coverageType"], "individual");
    assert_eq!(payload["answers"]["expectedVisits"], "medium");
    assert_eq!(payload["answers"]["hsaInterest"], "unsure");
}

#[tokio::test]
async fn unknown_answer_value_is_a_bad_request() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .oneshot(get("/api/v1/recommendations?expectedVisits=extreme"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("expectedVisits"), "{message}");
    assert!(message.contains("extreme"), "{message}");
}

#[tokio::test]
async fn posted_answers_are_validated_and_ranked() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/recommendations",
            serde_json::json!({
                "coverageType": "Family",
                "expectedVisits": "medium",
                "prescriptionTier": "none",
                "plannedProcedures": "major",
                "riskTolerance": "predictable",
                "hsaInterest": "unsure",
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["answers"]["coverageType"], "family");
    assert_eq!(payload["top_pick"]["plan_id"], "platinum-ppo");
    assert_eq!(payload["top_pick"]["estimated_annual_cost"], 11200);

    let response = app
        .oneshot(post_json(
            "/api/v1/recommendations",
            serde_json::json!({
                "coverageType": "individual",
                "expectedVisits": "low",
                "prescriptionTier": "experimental",
                "plannedProcedures": "none",
                "riskTolerance": "predictable",
                "hsaInterest": "no",
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "invalid value 'experimental' for prescriptionTier"
    );
}

#[tokio::test]
async fn plan_lookup_distinguishes_known_and_unknown_ids() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .clone()
        .oneshot(get("/api/v1/plans/gold-hmo"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], "Gold Plus HMO");
    assert_eq!(payload["type"], "HMO");
    assert_eq!(payload["copays"]["urgentCare"], 50);

    let response = app
        .oneshot(get("/api/v1/plans/diamond"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "plan 'diamond' not found");
}

#[tokio::test]
async fn estimate_endpoint_returns_cost_breakdown() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .oneshot(get("/api/v1/plans/bronze-hdhp/estimate?expectedVisits=low"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload["premium"], 2160);
    assert_eq!(payload["out_of_pocket"], 150);
    assert_eq!(payload["total"], 2310);
}

#[tokio::test]
async fn questionnaire_and_catalog_listing_are_served() {
    let app = advisor_router_with_catalog(PlanCatalog::standard());

    let response = app
        .clone()
        .oneshot(get("/api/v1/questionnaire"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(6));

    let response = app
        .oneshot(get("/api/v1/plans"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn empty_catalog_yields_empty_report() {
    let app = advisor_router_with_catalog(PlanCatalog::empty());

    let response = app
        .oneshot(get("/api/v1/recommendations"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert!(payload["top_pick"].is_null());
    assert_eq!(payload["plans"], serde_json::json!([]));
}
