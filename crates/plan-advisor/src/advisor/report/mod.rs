pub mod views;

pub use views::{CostBreakdown, RankedPlanView, TopPickView};

use serde::Serialize;

use super::catalog::PlanCatalog;
use super::domain::{Recommendation, UserInput};

/// Results page payload: the answers, the ranked list, and the highlighted top pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub answers: UserInput,
    pub top_pick: Option<TopPickView>,
    pub plans: Vec<RankedPlanView>,
}

impl RecommendationReport {
    /// Join ranked recommendations with their catalog records. Recommendations whose plan id
    /// no longer resolves are skipped.
    pub fn build(
        catalog: &PlanCatalog,
        answers: UserInput,
        recommendations: &[Recommendation],
    ) -> Self {
        let plans: Vec<RankedPlanView> = recommendations
            .iter()
            .filter_map(|rec| {
                let plan = catalog.get_plan_by_id(rec.plan_id.as_str())?;
                Some(RankedPlanView {
                    ranking: rec.ranking,
                    plan_id: plan.id.clone(),
                    plan_name: plan.name.clone(),
                    plan_type: plan.plan_type,
                    plan_type_label: plan.plan_type.label(),
                    confidence_score: rec.confidence_score,
                    monthly_premium: plan.premium.monthly,
                    cost: CostBreakdown::new(plan, rec.estimated_annual_cost),
                    reasons: rec.reasons.clone(),
                    score_breakdown: rec.score_breakdown.clone(),
                })
            })
            .collect();

        let top_pick = plans.first().map(|view| TopPickView {
            plan_id: view.plan_id.clone(),
            plan_name: view.plan_name.clone(),
            plan_type: view.plan_type,
            confidence_score: view.confidence_score,
            estimated_annual_cost: view.cost.total,
            monthly_premium: view.monthly_premium,
        });

        Self {
            answers,
            top_pick,
            plans,
        }
    }
}
