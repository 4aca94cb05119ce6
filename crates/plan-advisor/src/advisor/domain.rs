use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AdvisorError;

/// Identifier wrapper for catalog plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(pub String);

impl PlanId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Network design of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    Hmo,
    Ppo,
    Epo,
    Hdhp,
}

impl PlanType {
    pub const fn label(self) -> &'static str {
        match self {
            PlanType::Hmo => "HMO",
            PlanType::Ppo => "PPO",
            PlanType::Epo => "EPO",
            PlanType::Hdhp => "HDHP",
        }
    }
}

/// How routine visit and procedure costs reach the member.
///
/// `DeductibleFirst` plans bill list price against the deductible before any
/// coinsurance applies; `FlatCopay` plans charge a fixed fee per visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    FlatCopay,
    DeductibleFirst,
}

impl CostModel {
    pub const fn label(self) -> &'static str {
        match self {
            CostModel::FlatCopay => "flat_copay",
            CostModel::DeductibleFirst => "deductible_first",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premium {
    pub monthly: u32,
    /// Informational; not required to equal `monthly * 12`.
    pub annual: u32,
}

/// Amount that differs between individual and family coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAmount {
    pub individual: u32,
    pub family: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Copays {
    pub pcp: u32,
    pub specialist: u32,
    pub er: u32,
    pub urgent_care: u32,
}

/// Monthly copay per prescription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RxTiers {
    pub generic: u32,
    pub preferred: u32,
    pub non_preferred: u32,
    pub specialty: u32,
}

/// Immutable catalog record for a single health plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPlan {
    pub id: PlanId,
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub cost_model: CostModel,
    pub premium: Premium,
    pub deductible: TierAmount,
    pub oop_max: TierAmount,
    /// Percentage (0-100) paid by the member once the deductible is met.
    pub coinsurance: u8,
    pub copays: Copays,
    pub rx_tiers: RxTiers,
    pub hsa_eligible: bool,
    pub highlights: Vec<String>,
}

impl HealthPlan {
    pub fn oop_max_for(&self, coverage: CoverageType) -> u32 {
        match coverage {
            CoverageType::Individual => self.oop_max.individual,
            CoverageType::Couple | CoverageType::Family => self.oop_max.family,
        }
    }

    /// Upper bound on the estimated annual cost for the given coverage.
    pub fn annual_exposure_cap(&self, coverage: CoverageType) -> u32 {
        self.premium
            .annual
            .saturating_add(self.oop_max_for(coverage))
    }
}

/// Validated questionnaire answers. Every field is within its closed value set by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub coverage_type: CoverageType,
    pub expected_visits: ExpectedVisits,
    pub prescription_tier: PrescriptionTier,
    pub planned_procedures: PlannedProcedures,
    pub risk_tolerance: RiskTolerance,
    pub hsa_interest: HsaInterest,
}

macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const FIELD: &'static str = $field;

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AdvisorError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($value => Ok($name::$variant),)+
                    _ => Err(AdvisorError::InvalidInput {
                        field: $field,
                        value: raw.to_string(),
                    }),
                }
            }
        }
    };
}

answer_enum!(
    /// Who the plan needs to cover.
    CoverageType, "coverageType" {
        Individual => "individual",
        Couple => "couple",
        Family => "family",
    }
);

answer_enum!(
    ExpectedVisits, "expectedVisits" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

answer_enum!(
    PrescriptionTier, "prescriptionTier" {
        None => "none",
        Generic => "generic",
        Brand => "brand",
        Specialty => "specialty",
    }
);

answer_enum!(
    PlannedProcedures, "plannedProcedures" {
        None => "none",
        Minor => "minor",
        Major => "major",
        Baby => "baby",
    }
);

answer_enum!(
    RiskTolerance, "riskTolerance" {
        Predictable => "predictable",
        Risktaker => "risktaker",
    }
);

answer_enum!(
    HsaInterest, "hsaInterest" {
        Yes => "yes",
        No => "no",
        Unsure => "unsure",
    }
);

/// Derived per-plan result. Recomputed on every engine invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub plan_id: PlanId,
    pub confidence_score: u8,
    pub estimated_annual_cost: u32,
    pub reasons: Vec<String>,
    /// 1-based position after the stable sort by confidence.
    pub ranking: usize,
    pub score_breakdown: Vec<ScoreComponent>,
}

/// Weighted scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Cost,
    CoverageFit,
    RiskAlignment,
    HsaPreference,
}

impl ScoreFactor {
    /// Maximum points the factor can contribute.
    pub const fn weight(self) -> f64 {
        match self {
            ScoreFactor::Cost => 40.0,
            ScoreFactor::CoverageFit => 30.0,
            ScoreFactor::RiskAlignment => 20.0,
            ScoreFactor::HsaPreference => 10.0,
        }
    }
}

/// Discrete contribution to a confidence score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}
