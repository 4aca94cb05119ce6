//! Health plan recommendation: questionnaire parsing, cost estimation, scoring, and ranking.
//!
//! Everything below the router is pure and synchronous. A [`RecommendationEngine`] owns an
//! immutable [`PlanCatalog`] and recomputes the full ranking on every call, so one engine can
//! be shared freely across request handlers.

pub mod catalog;
pub mod domain;
pub mod estimation;
pub mod questionnaire;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, CatalogImportError, PlanCatalog, PlanCatalogImporter, PlanComparisonRow,
};
pub use domain::{
    CostModel, CoverageType, ExpectedVisits, HealthPlan, HsaInterest, PlanId, PlanType,
    PlannedProcedures, PrescriptionTier, Recommendation, RiskTolerance, ScoreComponent,
    ScoreFactor, UserInput,
};
pub use estimation::{
    calculate_score, estimate_annual_cost, generate_reasons, CostDistribution, MatchReason,
    RecommendationEngine, ScoreCard,
};
pub use questionnaire::{Questionnaire, QuestionnaireAnswers};
pub use report::{CostBreakdown, RankedPlanView, RecommendationReport, TopPickView};
pub use router::advisor_router;

/// Errors surfaced to callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisorError {
    /// An answer outside its closed value set. Raised before any plan is evaluated.
    #[error("invalid value '{value}' for {field}")]
    InvalidInput { field: &'static str, value: String },
    #[error("plan '{0}' not found")]
    PlanNotFound(String),
}
