use super::super::domain::{
    ExpectedVisits, HealthPlan, HsaInterest, PlanType, PlannedProcedures, PrescriptionTier,
    UserInput,
};
use super::CostDistribution;

/// Lists shorter than this are padded from the plan's highlights.
const MIN_REASONS: usize = 3;
const MAX_REASONS: usize = 4;

/// Plans within this factor of the cheapest estimate count as good value.
const VALUE_BAND: f64 = 1.15;

/// Justifications the engine can attach to a plan, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    LowestCost,
    ExcellentValue,
    FrequentVisitCopays,
    SpecialtyPricing,
    LowDeductibleProcedures,
    HsaSavings,
    FlexiblePpoNetwork,
    NoDeductible,
}

impl MatchReason {
    pub const fn message(self) -> &'static str {
        match self {
            MatchReason::LowestCost => "Lowest estimated annual cost for your needs",
            MatchReason::ExcellentValue => "Excellent value for your healthcare usage",
            MatchReason::FrequentVisitCopays => "Low copays ideal for frequent doctor visits",
            MatchReason::SpecialtyPricing => "Competitive specialty medication pricing",
            MatchReason::LowDeductibleProcedures => "Low deductible helps with planned procedures",
            MatchReason::HsaSavings => "HSA-eligible for tax-advantaged savings",
            MatchReason::FlexiblePpoNetwork => "Flexible PPO network with no referrals needed",
            MatchReason::NoDeductible => "No deductible for immediate coverage",
        }
    }
}

pub(crate) fn matched_reasons(
    plan: &HealthPlan,
    input: &UserInput,
    estimated_cost: u32,
    distribution: &CostDistribution,
) -> Vec<MatchReason> {
    let mut reasons = Vec::new();

    let cheapest = distribution.min();
    if estimated_cost == cheapest {
        reasons.push(MatchReason::LowestCost);
    } else if f64::from(estimated_cost) < f64::from(cheapest) * VALUE_BAND {
        reasons.push(MatchReason::ExcellentValue);
    }

    if input.expected_visits == ExpectedVisits::High && plan.copays.pcp < 20 {
        reasons.push(MatchReason::FrequentVisitCopays);
    }

    if input.prescription_tier == PrescriptionTier::Specialty && plan.rx_tiers.specialty < 150 {
        reasons.push(MatchReason::SpecialtyPricing);
    }

    if input.planned_procedures != PlannedProcedures::None && plan.deductible.individual < 1000 {
        reasons.push(MatchReason::LowDeductibleProcedures);
    }

    if plan.plan_type == PlanType::Hdhp && input.hsa_interest == HsaInterest::Yes {
        reasons.push(MatchReason::HsaSavings);
    }

    if plan.plan_type == PlanType::Ppo && plan.copays.pcp < 30 {
        reasons.push(MatchReason::FlexiblePpoNetwork);
    }

    if plan.deductible.individual == 0 {
        reasons.push(MatchReason::NoDeductible);
    }

    reasons
}

/// Ordered, human-readable justification for recommending `plan`.
///
/// Matched reasons come first in priority order; highlights pad short lists up to three
/// entries, and the result never exceeds four.
pub fn generate_reasons(
    plan: &HealthPlan,
    input: &UserInput,
    estimated_cost: u32,
    distribution: &CostDistribution,
) -> Vec<String> {
    let mut reasons: Vec<String> = matched_reasons(plan, input, estimated_cost, distribution)
        .into_iter()
        .map(|reason| reason.message().to_string())
        .collect();

    if reasons.len() < MIN_REASONS {
        let missing = MIN_REASONS - reasons.len();
        reasons.extend(plan.highlights.iter().take(missing).cloned());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
