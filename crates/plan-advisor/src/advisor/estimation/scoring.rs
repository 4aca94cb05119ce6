use super::super::domain::{
    ExpectedVisits, HealthPlan, HsaInterest, PlanType, PlannedProcedures, PrescriptionTier,
    RiskTolerance, ScoreComponent, ScoreFactor, UserInput,
};
use super::CostDistribution;

/// Points awarded when every plan costs the same.
const DEGENERATE_COST_POINTS: f64 = 20.0;

/// Composite confidence score with its weighted components.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub total: u8,
    pub components: Vec<ScoreComponent>,
}

pub fn calculate_score(
    plan: &HealthPlan,
    input: &UserInput,
    estimated_cost: u32,
    distribution: &CostDistribution,
) -> ScoreCard {
    let components = vec![
        cost_component(estimated_cost, distribution),
        coverage_component(plan, input),
        risk_component(plan, input),
        hsa_component(plan, input),
    ];

    let sum: f64 = components.iter().map(|component| component.points).sum();
    let total = sum.round().clamp(0.0, 100.0) as u8;

    ScoreCard { total, components }
}

fn cost_component(estimated_cost: u32, distribution: &CostDistribution) -> ScoreComponent {
    let (min, max) = (distribution.min(), distribution.max());
    let weight = ScoreFactor::Cost.weight();

    if max <= min {
        return ScoreComponent {
            factor: ScoreFactor::Cost,
            points: DEGENERATE_COST_POINTS,
            notes: "every plan has the same estimated cost".to_string(),
        };
    }

    let range = f64::from(max - min);
    let points = f64::from(max.saturating_sub(estimated_cost)) / range * weight;
    ScoreComponent {
        factor: ScoreFactor::Cost,
        points,
        notes: format!("estimated ${estimated_cost} within catalog range ${min}-${max}"),
    }
}

fn coverage_component(plan: &HealthPlan, input: &UserInput) -> ScoreComponent {
    let mut points = 0.0;
    let mut matched = Vec::new();

    let rx_match = match input.prescription_tier {
        PrescriptionTier::Specialty => (plan.rx_tiers.specialty < 150).then_some(10.0),
        PrescriptionTier::Brand => (plan.rx_tiers.preferred < 40).then_some(10.0),
        PrescriptionTier::Generic => (plan.rx_tiers.generic < 15).then_some(10.0),
        PrescriptionTier::None => Some(5.0),
    };
    if let Some(rx_points) = rx_match {
        points += rx_points;
        matched.push("prescriptions");
    }

    let visit_match = match input.expected_visits {
        ExpectedVisits::High => (plan.copays.pcp < 20).then_some(10.0),
        ExpectedVisits::Medium => (plan.copays.pcp < 30).then_some(10.0),
        ExpectedVisits::Low => Some(5.0),
    };
    if let Some(visit_points) = visit_match {
        points += visit_points;
        matched.push("visits");
    }

    if input.planned_procedures != PlannedProcedures::None && plan.deductible.individual < 1000 {
        points += 10.0;
        matched.push("procedures");
    }

    let notes = if matched.is_empty() {
        "no coverage match".to_string()
    } else {
        format!("matched {}", matched.join(", "))
    };

    ScoreComponent {
        factor: ScoreFactor::CoverageFit,
        points,
        notes,
    }
}

fn risk_component(plan: &HealthPlan, input: &UserInput) -> ScoreComponent {
    let is_hdhp = plan.plan_type == PlanType::Hdhp;
    let aligned = match input.risk_tolerance {
        RiskTolerance::Risktaker => is_hdhp,
        RiskTolerance::Predictable => !is_hdhp,
    };

    let label = plan.plan_type.label();
    let (points, notes) = if aligned {
        (20.0, format!("{label} suits {} members", input.risk_tolerance))
    } else {
        (
            10.0,
            format!("{label} is a partial fit for {} members", input.risk_tolerance),
        )
    };

    ScoreComponent {
        factor: ScoreFactor::RiskAlignment,
        points,
        notes,
    }
}

fn hsa_component(plan: &HealthPlan, input: &UserInput) -> ScoreComponent {
    let aligned = match input.hsa_interest {
        HsaInterest::Yes => plan.hsa_eligible,
        HsaInterest::No => !plan.hsa_eligible,
        HsaInterest::Unsure => false,
    };

    let notes = match (aligned, plan.hsa_eligible) {
        (true, true) => "HSA eligibility requested and offered",
        (true, false) => "no HSA wanted and none attached",
        (false, _) if input.hsa_interest == HsaInterest::Unsure => "HSA preference undecided",
        (false, _) => "HSA preference not matched",
    };

    ScoreComponent {
        factor: ScoreFactor::HsaPreference,
        points: if aligned { 10.0 } else { 5.0 },
        notes: notes.to_string(),
    }
}
