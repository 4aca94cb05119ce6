mod cost;
mod reasons;
mod scoring;

pub use cost::estimate_annual_cost;
pub use reasons::{generate_reasons, MatchReason};
pub use scoring::{calculate_score, ScoreCard};

use tracing::debug;

use super::catalog::PlanCatalog;
use super::domain::{HealthPlan, Recommendation, UserInput};
use super::questionnaire::QuestionnaireAnswers;
use super::report::{CostBreakdown, RecommendationReport};
use super::AdvisorError;

/// Estimated annual cost of every catalog plan for one questionnaire submission.
///
/// Computed once per engine invocation and shared by the scorer and reason generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostDistribution {
    costs: Vec<u32>,
    min: u32,
    max: u32,
}

impl CostDistribution {
    pub fn from_costs(costs: Vec<u32>) -> Self {
        let min = costs.iter().copied().min().unwrap_or(0);
        let max = costs.iter().copied().max().unwrap_or(0);
        Self { costs, min, max }
    }

    pub fn for_catalog(catalog: &PlanCatalog, input: &UserInput) -> Self {
        Self::from_costs(
            catalog
                .plans()
                .iter()
                .map(|plan| estimate_annual_cost(plan, input))
                .collect(),
        )
    }

    /// Costs in catalog order.
    pub fn costs(&self) -> &[u32] {
        &self.costs
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

/// Stateless recommender that ranks an injected, read-only plan catalog.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: PlanCatalog,
}

impl RecommendationEngine {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn get_plan_by_id(&self, plan_id: &str) -> Option<&HealthPlan> {
        self.catalog.get_plan_by_id(plan_id)
    }

    /// Validate raw answers and rank every plan. Invalid answers fail before any plan is scored.
    pub fn calculate_recommendations(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> Result<Vec<Recommendation>, AdvisorError> {
        let input = UserInput::try_from(answers)?;
        Ok(self.recommend(&input))
    }

    /// Rank every catalog plan for validated input, highest confidence first.
    pub fn recommend(&self, input: &UserInput) -> Vec<Recommendation> {
        let distribution = CostDistribution::for_catalog(&self.catalog, input);

        let mut recommendations: Vec<Recommendation> = self
            .catalog
            .plans()
            .iter()
            .zip(distribution.costs())
            .map(|(plan, &estimated_cost)| {
                let card = calculate_score(plan, input, estimated_cost, &distribution);
                Recommendation {
                    plan_id: plan.id.clone(),
                    confidence_score: card.total,
                    estimated_annual_cost: estimated_cost,
                    reasons: generate_reasons(plan, input, estimated_cost, &distribution),
                    ranking: 0,
                    score_breakdown: card.components,
                }
            })
            .collect();

        // Stable: equal scores keep catalog order.
        recommendations.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
        for (index, recommendation) in recommendations.iter_mut().enumerate() {
            recommendation.ranking = index + 1;
        }

        debug!(
            plans = recommendations.len(),
            top_plan = recommendations.first().map(|rec| rec.plan_id.as_str()),
            cheapest = distribution.min(),
            "ranked plan catalog"
        );

        recommendations
    }

    /// Ranked recommendations joined with catalog details for display.
    pub fn report(&self, input: &UserInput) -> RecommendationReport {
        let recommendations = self.recommend(input);
        RecommendationReport::build(&self.catalog, *input, &recommendations)
    }

    /// Cost calculator for a single plan.
    pub fn estimate_plan(
        &self,
        plan_id: &str,
        answers: &QuestionnaireAnswers,
    ) -> Result<CostBreakdown, AdvisorError> {
        let input = UserInput::try_from(answers)?;
        let plan = self
            .catalog
            .get_plan_by_id(plan_id)
            .ok_or_else(|| AdvisorError::PlanNotFound(plan_id.to_string()))?;

        Ok(CostBreakdown::new(plan, estimate_annual_cost(plan, &input)))
    }
}
