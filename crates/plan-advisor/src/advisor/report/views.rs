use serde::Serialize;

use super::super::domain::{HealthPlan, PlanId, PlanType, ScoreComponent};

/// Premium versus non-premium split of an estimated annual cost, as charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub premium: u32,
    pub out_of_pocket: u32,
    pub total: u32,
}

impl CostBreakdown {
    pub fn new(plan: &HealthPlan, estimated_annual_cost: u32) -> Self {
        Self {
            premium: plan.premium.annual,
            out_of_pocket: estimated_annual_cost.saturating_sub(plan.premium.annual),
            total: estimated_annual_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPickView {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub plan_type: PlanType,
    pub confidence_score: u8,
    pub estimated_annual_cost: u32,
    pub monthly_premium: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlanView {
    pub ranking: usize,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub plan_type: PlanType,
    pub plan_type_label: &'static str,
    pub confidence_score: u8,
    pub monthly_premium: u32,
    pub cost: CostBreakdown,
    pub reasons: Vec<String>,
    pub score_breakdown: Vec<ScoreComponent>,
}
