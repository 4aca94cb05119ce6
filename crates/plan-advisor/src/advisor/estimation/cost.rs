use super::super::domain::{
    CostModel, CoverageType, ExpectedVisits, HealthPlan, PlannedProcedures, PrescriptionTier,
    UserInput,
};

/// Expected visits per year for one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VisitProfile {
    pub pcp: u32,
    pub specialist: u32,
    pub er: u32,
    pub urgent_care: u32,
}

// List prices billed against the deductible on deductible-first plans.
const PCP_LIST_PRICE: u32 = 150;
const SPECIALIST_LIST_PRICE: u32 = 250;
const ER_LIST_PRICE: u32 = 1500;
const URGENT_CARE_LIST_PRICE: u32 = 200;

pub(crate) const fn visit_profile(visits: ExpectedVisits) -> VisitProfile {
    match visits {
        ExpectedVisits::Low => VisitProfile {
            pcp: 1,
            specialist: 0,
            er: 0,
            urgent_care: 0,
        },
        ExpectedVisits::Medium => VisitProfile {
            pcp: 3,
            specialist: 2,
            er: 0,
            urgent_care: 1,
        },
        ExpectedVisits::High => VisitProfile {
            pcp: 6,
            specialist: 4,
            er: 1,
            urgent_care: 2,
        },
    }
}

/// Nominal billed price of the planned procedure.
pub(crate) const fn procedure_price(procedures: PlannedProcedures) -> u32 {
    match procedures {
        PlannedProcedures::None => 0,
        PlannedProcedures::Minor => 2000,
        PlannedProcedures::Major => 15000,
        PlannedProcedures::Baby => 12000,
    }
}

/// Blunt linear scale-up of the whole accumulated total, premium included.
pub(crate) const fn household_multiplier(coverage: CoverageType) -> f64 {
    match coverage {
        CoverageType::Individual => 1.0,
        CoverageType::Couple => 1.8,
        CoverageType::Family => 2.5,
    }
}

fn monthly_rx_copay(plan: &HealthPlan, tier: PrescriptionTier) -> u32 {
    match tier {
        PrescriptionTier::None => 0,
        PrescriptionTier::Generic => plan.rx_tiers.generic,
        PrescriptionTier::Brand => plan.rx_tiers.preferred,
        PrescriptionTier::Specialty => plan.rx_tiers.specialty,
    }
}

fn visit_cost(plan: &HealthPlan, visits: VisitProfile) -> f64 {
    match plan.cost_model {
        CostModel::DeductibleFirst => {
            let billed = visits.pcp * PCP_LIST_PRICE
                + visits.specialist * SPECIALIST_LIST_PRICE
                + visits.er * ER_LIST_PRICE
                + visits.urgent_care * URGENT_CARE_LIST_PRICE;
            f64::from(billed.min(plan.deductible.individual))
        }
        CostModel::FlatCopay => {
            let copays = &plan.copays;
            f64::from(visits.pcp) * f64::from(copays.pcp)
                + f64::from(visits.specialist) * f64::from(copays.specialist)
                + f64::from(visits.er) * f64::from(copays.er)
                + f64::from(visits.urgent_care) * f64::from(copays.urgent_care)
        }
    }
}

fn procedure_cost(plan: &HealthPlan, procedures: PlannedProcedures) -> f64 {
    let price = f64::from(procedure_price(procedures));
    if price == 0.0 {
        return 0.0;
    }

    let coinsurance = f64::from(plan.coinsurance) / 100.0;
    let member_share = match plan.cost_model {
        CostModel::DeductibleFirst => {
            let deductible = f64::from(plan.deductible.individual);
            price.min(deductible) + (price - deductible).max(0.0) * coinsurance
        }
        CostModel::FlatCopay => price * coinsurance,
    };

    member_share.max(0.0)
}

/// Estimated total annual cost (premium plus expected out-of-pocket) of a plan for one
/// questionnaire submission. Pure; the result never exceeds the plan's annual premium plus
/// the out-of-pocket maximum for the chosen coverage.
pub fn estimate_annual_cost(plan: &HealthPlan, input: &UserInput) -> u32 {
    let mut total = f64::from(plan.premium.annual);

    total += visit_cost(plan, visit_profile(input.expected_visits));
    total += f64::from(monthly_rx_copay(plan, input.prescription_tier)) * 12.0;
    total += procedure_cost(plan, input.planned_procedures);

    // Multiplier before cap: a household can be clipped below the individual-scaled figure.
    total *= household_multiplier(input.coverage_type);
    total = total.min(f64::from(plan.annual_exposure_cap(input.coverage_type)));

    total.round().max(0.0) as u32
}
