use super::common::*;
use crate::advisor::catalog::PlanCatalog;
use crate::advisor::domain::{
    CostModel, CoverageType, ExpectedVisits, PlannedProcedures, PrescriptionTier,
};
use crate::advisor::estimation::estimate_annual_cost;

fn costs_for(input: &crate::advisor::domain::UserInput) -> Vec<u32> {
    PlanCatalog::standard()
        .plans()
        .iter()
        .map(|plan| estimate_annual_cost(plan, input))
        .collect()
}

#[test]
fn low_usage_individual_pays_premium_plus_one_visit() {
    assert_eq!(costs_for(&baseline_input()), vec![2310, 4225, 5415, 7210]);
}

#[test]
fn deductible_first_visits_are_capped_at_the_deductible() {
    let mut input = baseline_input();
    input.expected_visits = ExpectedVisits::High;

    let bronze = reference_plan("bronze-hdhp");
    // 6 PCP + 4 specialist + 1 ER + 2 urgent care at list price is $3,800; deductible is $3,000.
    assert_eq!(estimate_annual_cost(&bronze, &input), 2160 + 3000);
}

#[test]
fn flat_copay_visits_sum_per_visit_fees() {
    let mut input = baseline_input();
    input.expected_visits = ExpectedVisits::Medium;

    let silver = reference_plan("silver-ppo");
    assert_eq!(estimate_annual_cost(&silver, &input), 4200 + 3 * 25 + 2 * 50 + 75);
}

#[test]
fn prescriptions_add_twelve_monthly_copays() {
    let mut input = baseline_input();
    input.prescription_tier = PrescriptionTier::Specialty;
    assert_eq!(costs_for(&input), vec![4110, 6625, 6615, 8110]);

    input.prescription_tier = PrescriptionTier::Brand;
    let bronze = reference_plan("bronze-hdhp");
    assert_eq!(estimate_annual_cost(&bronze, &input), 2310 + 35 * 12);
}

#[test]
fn procedures_below_the_deductible_are_paid_in_full() {
    let mut input = baseline_input();
    input.planned_procedures = PlannedProcedures::Minor;

    assert_eq!(estimate_annual_cost(&reference_plan("bronze-hdhp"), &input), 4310);
    assert_eq!(estimate_annual_cost(&reference_plan("gold-hmo"), &input), 5615);
}

#[test]
fn procedures_above_the_deductible_add_coinsurance() {
    let mut input = baseline_input();
    input.planned_procedures = PlannedProcedures::Baby;

    // $3,000 deductible plus 20% of the remaining $9,000.
    assert_eq!(
        estimate_annual_cost(&reference_plan("bronze-hdhp"), &input),
        2310 + 3000 + 1800
    );
}

#[test]
fn major_surgery_costs_per_plan() {
    assert_eq!(
        costs_for(&surgery_input(CoverageType::Individual)),
        vec![8710, 7450, 7055, 8795]
    );
}

#[test]
fn family_multiplier_applies_before_the_out_of_pocket_cap() {
    let individual = costs_for(&surgery_input(CoverageType::Individual));
    let family = costs_for(&surgery_input(CoverageType::Family));

    assert_eq!(family, vec![16160, 14200, 12400, 11200]);
    for (plan, (family_cost, individual_cost)) in PlanCatalog::standard()
        .plans()
        .iter()
        .zip(family.iter().zip(&individual))
    {
        assert!(family_cost > individual_cost, "{} family cost", plan.id);
        assert!(*family_cost <= plan.premium.annual + plan.oop_max.family);
    }
}

#[test]
fn couple_multiplier_can_be_clipped_by_the_family_cap() {
    let mut input = baseline_input();
    input.coverage_type = CoverageType::Couple;

    // Platinum: 7210 * 1.8 = 12978, clipped to 7200 + 4000.
    assert_eq!(costs_for(&input), vec![4158, 7605, 9747, 11200]);
}

#[test]
fn fractional_totals_round_half_up() {
    let mut input = baseline_input();
    input.coverage_type = CoverageType::Family;

    // 4225 * 2.5 = 10562.5
    assert_eq!(estimate_annual_cost(&reference_plan("silver-ppo"), &input), 10563);
}

#[test]
fn cost_model_not_the_copay_value_selects_the_visit_formula() {
    let mut plan = reference_plan("gold-hmo");
    plan.copays.pcp = 0;
    let input = baseline_input();

    // A $0 PCP copay on a flat-copay plan is simply free primary care.
    assert_eq!(plan.cost_model, CostModel::FlatCopay);
    assert_eq!(estimate_annual_cost(&plan, &input), 5400);

    plan.cost_model = CostModel::DeductibleFirst;
    assert_eq!(estimate_annual_cost(&plan, &input), 5400 + 150);
}

#[test]
fn estimates_are_repeatable() {
    let input = surgery_input(CoverageType::Couple);
    let plan = reference_plan("silver-ppo");
    let first = estimate_annual_cost(&plan, &input);
    for _ in 0..10 {
        assert_eq!(estimate_annual_cost(&plan, &input), first);
    }
}
