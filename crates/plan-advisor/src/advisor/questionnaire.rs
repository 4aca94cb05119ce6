use serde::{Deserialize, Serialize};

use super::domain::{
    CoverageType, ExpectedVisits, HsaInterest, PlannedProcedures, PrescriptionTier,
    RiskTolerance, UserInput,
};
use super::AdvisorError;

/// Raw questionnaire submission as it arrives from a form or query string.
///
/// Nothing here is validated; convert with [`UserInput::try_from`] before handing the
/// answers to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    pub coverage_type: String,
    pub expected_visits: String,
    pub prescription_tier: String,
    pub planned_procedures: String,
    pub risk_tolerance: String,
    pub hsa_interest: String,
}

impl From<UserInput> for QuestionnaireAnswers {
    fn from(input: UserInput) -> Self {
        Self {
            coverage_type: input.coverage_type.to_string(),
            expected_visits: input.expected_visits.to_string(),
            prescription_tier: input.prescription_tier.to_string(),
            planned_procedures: input.planned_procedures.to_string(),
            risk_tolerance: input.risk_tolerance.to_string(),
            hsa_interest: input.hsa_interest.to_string(),
        }
    }
}

impl TryFrom<&QuestionnaireAnswers> for UserInput {
    type Error = AdvisorError;

    fn try_from(answers: &QuestionnaireAnswers) -> Result<Self, Self::Error> {
        Ok(Self {
            coverage_type: answers.coverage_type.parse::<CoverageType>()?,
            expected_visits: answers.expected_visits.parse::<ExpectedVisits>()?,
            prescription_tier: answers.prescription_tier.parse::<PrescriptionTier>()?,
            planned_procedures: answers.planned_procedures.parse::<PlannedProcedures>()?,
            risk_tolerance: answers.risk_tolerance.parse::<RiskTolerance>()?,
            hsa_interest: answers.hsa_interest.parse::<HsaInterest>()?,
        })
    }
}

/// Single selectable answer within a questionnaire step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: &'static str,
    pub prompt: &'static str,
    pub options: Vec<QuestionOption>,
}

/// Ordered questionnaire definition served to front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    pub questions: Vec<Question>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: vec![
                question(
                    CoverageType::FIELD,
                    "Who needs coverage?",
                    &[
                        (CoverageType::Individual.as_str(), "Just me", "Individual coverage"),
                        (
                            CoverageType::Couple.as_str(),
                            "Me + Spouse",
                            "Coverage for you and your spouse/partner",
                        ),
                        (
                            CoverageType::Family.as_str(),
                            "Me + Children or Family",
                            "Coverage for you and dependents",
                        ),
                    ],
                ),
                question(
                    ExpectedVisits::FIELD,
                    "How often do you visit the doctor?",
                    &[
                        (
                            ExpectedVisits::Low.as_str(),
                            "Rarely",
                            "1-2 visits per year for check-ups",
                        ),
                        (ExpectedVisits::Medium.as_str(), "Sometimes", "3-5 visits per year"),
                        (
                            ExpectedVisits::High.as_str(),
                            "Often",
                            "6+ visits per year or ongoing treatment",
                        ),
                    ],
                ),
                question(
                    PrescriptionTier::FIELD,
                    "Do you take prescription medications?",
                    &[
                        (
                            PrescriptionTier::None.as_str(),
                            "None",
                            "I don't take regular medications",
                        ),
                        (
                            PrescriptionTier::Generic.as_str(),
                            "Generic medications",
                            "Low-cost generic prescriptions",
                        ),
                        (
                            PrescriptionTier::Brand.as_str(),
                            "Brand-name medications",
                            "Preferred or non-generic prescriptions",
                        ),
                        (
                            PrescriptionTier::Specialty.as_str(),
                            "Specialty medications",
                            "High-cost specialty drugs",
                        ),
                    ],
                ),
                question(
                    PlannedProcedures::FIELD,
                    "Any planned medical procedures?",
                    &[
                        (
                            PlannedProcedures::None.as_str(),
                            "None",
                            "No planned procedures this year",
                        ),
                        (
                            PlannedProcedures::Minor.as_str(),
                            "Minor procedure",
                            "Outpatient procedure or minor surgery",
                        ),
                        (
                            PlannedProcedures::Major.as_str(),
                            "Major surgery",
                            "Planned major operation or hospitalization",
                        ),
                        (
                            PlannedProcedures::Baby.as_str(),
                            "Having a baby",
                            "Maternity or newborn care",
                        ),
                    ],
                ),
                question(
                    RiskTolerance::FIELD,
                    "What's your preference?",
                    &[
                        (
                            RiskTolerance::Predictable.as_str(),
                            "Predictable costs",
                            "I prefer knowing exactly what I'll pay with copays and low deductibles",
                        ),
                        (
                            RiskTolerance::Risktaker.as_str(),
                            "Lower premiums",
                            "I'm healthy and willing to pay higher deductibles for lower monthly costs",
                        ),
                    ],
                ),
                question(
                    HsaInterest::FIELD,
                    "Are you interested in a Health Savings Account (HSA)?",
                    &[
                        (
                            HsaInterest::Yes.as_str(),
                            "Yes, I want HSA eligibility",
                            "I want to save pre-tax dollars for healthcare",
                        ),
                        (
                            HsaInterest::No.as_str(),
                            "No, not interested",
                            "I don't want or need an HSA",
                        ),
                        (
                            HsaInterest::Unsure.as_str(),
                            "Not sure / What's an HSA?",
                            "Show me all options",
                        ),
                    ],
                ),
            ],
        }
    }

    pub fn question(&self, field: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.field == field)
    }
}

fn question(
    field: &'static str,
    prompt: &'static str,
    options: &[(&'static str, &'static str, &'static str)],
) -> Question {
    Question {
        field,
        prompt,
        options: options
            .iter()
            .map(|&(value, label, description)| QuestionOption {
                value,
                label,
                description,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            coverage_type: "individual".to_string(),
            expected_visits: "medium".to_string(),
            prescription_tier: "none".to_string(),
            planned_procedures: "none".to_string(),
            risk_tolerance: "predictable".to_string(),
            hsa_interest: "unsure".to_string(),
        }
    }

    #[test]
    fn parses_answers_case_insensitively() {
        let mut raw = answers();
        raw.coverage_type = " Family ".to_string();
        raw.hsa_interest = "YES".to_string();

        let input = UserInput::try_from(&raw).expect("answers parse");

        assert_eq!(input.coverage_type, CoverageType::Family);
        assert_eq!(input.hsa_interest, HsaInterest::Yes);
        assert_eq!(input.prescription_tier, PrescriptionTier::None);
    }

    #[test]
    fn rejects_values_outside_the_closed_set() {
        let mut raw = answers();
        raw.expected_visits = "extreme".to_string();

        match UserInput::try_from(&raw) {
            Err(AdvisorError::InvalidInput { field, value }) => {
                assert_eq!(field, "expectedVisits");
                assert_eq!(value, "extreme");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn reports_first_invalid_field_in_questionnaire_order() {
        let mut raw = answers();
        raw.coverage_type = "household".to_string();
        raw.hsa_interest = "maybe".to_string();

        let err = UserInput::try_from(&raw).expect_err("invalid answers rejected");
        assert!(matches!(
            err,
            AdvisorError::InvalidInput {
                field: "coverageType",
                ..
            }
        ));
    }

    #[test]
    fn typed_input_converts_back_to_raw_answers() {
        let input = UserInput::try_from(&answers()).expect("answers parse");
        assert_eq!(QuestionnaireAnswers::from(input), answers());
    }

    #[test]
    fn standard_questionnaire_covers_every_answer_value() {
        let questionnaire = Questionnaire::standard();
        assert_eq!(questionnaire.questions.len(), 6);

        let visits = questionnaire
            .question(ExpectedVisits::FIELD)
            .expect("visits question present");
        let values: Vec<_> = visits.options.iter().map(|option| option.value).collect();
        let expected: Vec<_> = ExpectedVisits::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(values, expected);

        let coverage = questionnaire
            .question(CoverageType::FIELD)
            .expect("coverage question present");
        assert_eq!(coverage.options[0].label, "Just me");
    }
}
