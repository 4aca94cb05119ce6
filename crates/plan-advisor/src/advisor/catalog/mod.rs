mod importer;

pub use importer::{CatalogImportError, PlanCatalogImporter};

use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{
    CostModel, Copays, HealthPlan, PlanId, PlanType, Premium, RxTiers, TierAmount,
};

/// Read-only collection of plans, injected into the engine for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<HealthPlan>,
}

impl PlanCatalog {
    /// Validate and wrap a set of plans. Catalog order is preserved and used as the tie-break
    /// order during ranking.
    pub fn new(plans: Vec<HealthPlan>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for plan in &plans {
            if plan.id.0.trim().is_empty() {
                return Err(CatalogError::EmptyId {
                    name: plan.name.clone(),
                });
            }
            if !seen.insert(plan.id.clone()) {
                return Err(CatalogError::DuplicatePlan(plan.id.clone()));
            }
            if plan.highlights.is_empty() {
                return Err(CatalogError::MissingHighlights(plan.id.clone()));
            }
            if plan.coinsurance > 100 {
                return Err(CatalogError::CoinsuranceOutOfRange {
                    plan_id: plan.id.clone(),
                    coinsurance: plan.coinsurance,
                });
            }
        }

        Ok(Self { plans })
    }

    /// Catalog with no plans; engines built on it return no recommendations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The four reference plans offered by the marketplace.
    pub fn standard() -> Self {
        Self {
            plans: vec![
                HealthPlan {
                    id: PlanId::from("bronze-hdhp"),
                    name: "Basic Bronze HDHP".to_string(),
                    plan_type: PlanType::Hdhp,
                    cost_model: CostModel::DeductibleFirst,
                    premium: Premium {
                        monthly: 180,
                        annual: 2160,
                    },
                    deductible: TierAmount {
                        individual: 3000,
                        family: 6000,
                    },
                    oop_max: TierAmount {
                        individual: 7000,
                        family: 14000,
                    },
                    coinsurance: 20,
                    copays: Copays {
                        pcp: 0,
                        specialist: 0,
                        er: 0,
                        urgent_care: 0,
                    },
                    rx_tiers: RxTiers {
                        generic: 10,
                        preferred: 35,
                        non_preferred: 70,
                        specialty: 150,
                    },
                    hsa_eligible: true,
                    highlights: highlights(&[
                        "Lowest premium",
                        "HSA eligible",
                        "Good for healthy individuals",
                    ]),
                },
                HealthPlan {
                    id: PlanId::from("silver-ppo"),
                    name: "Silver Select PPO".to_string(),
                    plan_type: PlanType::Ppo,
                    cost_model: CostModel::FlatCopay,
                    premium: Premium {
                        monthly: 350,
                        annual: 4200,
                    },
                    deductible: TierAmount {
                        individual: 1500,
                        family: 3000,
                    },
                    oop_max: TierAmount {
                        individual: 5000,
                        family: 10000,
                    },
                    coinsurance: 20,
                    copays: Copays {
                        pcp: 25,
                        specialist: 50,
                        er: 250,
                        urgent_care: 75,
                    },
                    rx_tiers: RxTiers {
                        generic: 10,
                        preferred: 40,
                        non_preferred: 80,
                        specialty: 200,
                    },
                    hsa_eligible: false,
                    highlights: highlights(&[
                        "Broad network",
                        "Balance of cost & coverage",
                        "No referrals needed",
                    ]),
                },
                HealthPlan {
                    id: PlanId::from("gold-hmo"),
                    name: "Gold Plus HMO".to_string(),
                    plan_type: PlanType::Hmo,
                    cost_model: CostModel::FlatCopay,
                    premium: Premium {
                        monthly: 450,
                        annual: 5400,
                    },
                    deductible: TierAmount {
                        individual: 500,
                        family: 1000,
                    },
                    oop_max: TierAmount {
                        individual: 3500,
                        family: 7000,
                    },
                    coinsurance: 10,
                    copays: Copays {
                        pcp: 15,
                        specialist: 30,
                        er: 150,
                        urgent_care: 50,
                    },
                    rx_tiers: RxTiers {
                        generic: 5,
                        preferred: 25,
                        non_preferred: 50,
                        specialty: 100,
                    },
                    hsa_eligible: false,
                    highlights: highlights(&[
                        "Low copays",
                        "Predictable costs",
                        "Great for families",
                    ]),
                },
                HealthPlan {
                    id: PlanId::from("platinum-ppo"),
                    name: "Platinum Premier PPO".to_string(),
                    plan_type: PlanType::Ppo,
                    cost_model: CostModel::FlatCopay,
                    premium: Premium {
                        monthly: 600,
                        annual: 7200,
                    },
                    deductible: TierAmount {
                        individual: 0,
                        family: 0,
                    },
                    oop_max: TierAmount {
                        individual: 2000,
                        family: 4000,
                    },
                    coinsurance: 10,
                    copays: Copays {
                        pcp: 10,
                        specialist: 20,
                        er: 100,
                        urgent_care: 25,
                    },
                    rx_tiers: RxTiers {
                        generic: 5,
                        preferred: 15,
                        non_preferred: 35,
                        specialty: 75,
                    },
                    hsa_eligible: false,
                    highlights: highlights(&[
                        "No deductible",
                        "Lowest out-of-pocket",
                        "Premium coverage",
                    ]),
                },
            ],
        }
    }

    pub fn plans(&self) -> &[HealthPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Resolve a recommendation's plan id back to the full record. Absence is a normal outcome.
    pub fn get_plan_by_id(&self, plan_id: &str) -> Option<&HealthPlan> {
        self.plans.iter().find(|plan| plan.id.as_str() == plan_id)
    }

    /// Side-by-side comparison rows in catalog order.
    pub fn comparison(&self) -> Vec<PlanComparisonRow> {
        self.plans.iter().map(PlanComparisonRow::from).collect()
    }
}

fn highlights(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Flattened plan attributes for the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanComparisonRow {
    pub plan_id: PlanId,
    pub name: String,
    pub plan_type: PlanType,
    pub plan_type_label: &'static str,
    pub monthly_premium: u32,
    pub annual_premium: u32,
    pub individual_deductible: u32,
    pub family_deductible: u32,
    pub individual_oop_max: u32,
    pub coinsurance: u8,
    pub pcp_copay: u32,
    pub specialist_copay: u32,
    pub er_copay: u32,
    pub generic_rx: u32,
    pub hsa_eligible: bool,
}

impl From<&HealthPlan> for PlanComparisonRow {
    fn from(plan: &HealthPlan) -> Self {
        Self {
            plan_id: plan.id.clone(),
            name: plan.name.clone(),
            plan_type: plan.plan_type,
            plan_type_label: plan.plan_type.label(),
            monthly_premium: plan.premium.monthly,
            annual_premium: plan.premium.annual,
            individual_deductible: plan.deductible.individual,
            family_deductible: plan.deductible.family,
            individual_oop_max: plan.oop_max.individual,
            coinsurance: plan.coinsurance,
            pcp_copay: plan.copays.pcp,
            specialist_copay: plan.copays.specialist,
            er_copay: plan.copays.er,
            generic_rx: plan.rx_tiers.generic,
            hsa_eligible: plan.hsa_eligible,
        }
    }
}

/// Catalog invariant violations detected when a catalog is assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("plan '{name}' is missing an id")]
    EmptyId { name: String },
    #[error("plan id '{0}' appears more than once")]
    DuplicatePlan(PlanId),
    #[error("plan '{0}' must list at least one highlight")]
    MissingHighlights(PlanId),
    #[error("plan '{plan_id}' coinsurance {coinsurance}% exceeds 100%")]
    CoinsuranceOutOfRange { plan_id: PlanId, coinsurance: u8 },
}
