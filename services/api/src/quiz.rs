use crate::infra::load_catalog;
use chrono::{Local, NaiveDate};
use clap::Args;
use plan_advisor::advisor::{
    PlanCatalog, PlanComparisonRow, QuestionnaireAnswers, RecommendationEngine,
    RecommendationReport, UserInput,
};
use plan_advisor::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Who needs coverage: individual, couple, or family
    #[arg(long, default_value = "individual")]
    pub(crate) coverage_type: String,
    /// Expected doctor visits: low, medium, or high
    #[arg(long, default_value = "medium")]
    pub(crate) expected_visits: String,
    /// Regular prescriptions: none, generic, brand, or specialty
    #[arg(long, default_value = "none")]
    pub(crate) prescription_tier: String,
    /// Planned procedures: none, minor, major, or baby
    #[arg(long, default_value = "none")]
    pub(crate) planned_procedures: String,
    /// Cost preference: predictable or risktaker
    #[arg(long, default_value = "predictable")]
    pub(crate) risk_tolerance: String,
    /// Interest in an HSA: yes, no, or unsure
    #[arg(long, default_value = "unsure")]
    pub(crate) hsa_interest: String,
    /// Optional plan catalog CSV export (defaults to the reference plans)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn answers(&self) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            coverage_type: self.coverage_type.clone(),
            expected_visits: self.expected_visits.clone(),
            prescription_tier: self.prescription_tier.clone(),
            planned_procedures: self.planned_procedures.clone(),
            risk_tolerance: self.risk_tolerance.clone(),
            hsa_interest: self.hsa_interest.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct PlansArgs {
    /// Optional plan catalog CSV export (defaults to the reference plans)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    generated_on: NaiveDate,
    #[serde(flatten)]
    report: &'a RecommendationReport,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let input = UserInput::try_from(&args.answers())?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let engine = RecommendationEngine::new(catalog);
    let report = engine.report(&input);
    let today = Local::now().date_naive();

    if args.json {
        let output = RecommendOutput {
            generated_on: today,
            report: &report,
        };
        let rendered = serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&report, today));
    }

    Ok(())
}

pub(crate) fn run_plans(args: PlansArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    print!("{}", render_comparison(&catalog));
    Ok(())
}

fn render_report(report: &RecommendationReport, today: NaiveDate) -> String {
    let answers = &report.answers;
    let mut out = format!("Plan recommendations ({today})\n");
    out.push_str(&format!(
        "Answers: {} coverage | {} visits | {} prescriptions | {} procedures | {} | HSA {}\n",
        answers.coverage_type,
        answers.expected_visits,
        answers.prescription_tier,
        answers.planned_procedures,
        answers.risk_tolerance,
        answers.hsa_interest
    ));

    let Some(top) = &report.top_pick else {
        out.push_str("\nNo plans available in the catalog.\n");
        return out;
    };
    out.push_str(&format!(
        "\nTop pick: {} ({}% match) | ${}/mo | est. ${}/yr\n",
        top.plan_name, top.confidence_score, top.monthly_premium, top.estimated_annual_cost
    ));

    for view in &report.plans {
        out.push_str(&format!(
            "\n#{} {} [{}] {}% match\n",
            view.ranking, view.plan_name, view.plan_type_label, view.confidence_score
        ));
        out.push_str(&format!(
            "  est. ${}/yr = ${} premium + ${} out-of-pocket\n",
            view.cost.total, view.cost.premium, view.cost.out_of_pocket
        ));
        for reason in &view.reasons {
            out.push_str(&format!("  - {reason}\n"));
        }
    }

    out
}

fn render_comparison(catalog: &PlanCatalog) -> String {
    let rows = catalog.comparison();
    if rows.is_empty() {
        return "No plans available in the catalog.\n".to_string();
    }

    let mut out = format!(
        "{:<24} {:<5} {:>8} {:>10} {:>8} {:>6} {:>6} {:>4}\n",
        "Plan", "Type", "Monthly", "Deductible", "OOP max", "PCP", "Rx", "HSA"
    );
    for row in &rows {
        out.push_str(&comparison_line(row));
    }
    out
}

fn comparison_line(row: &PlanComparisonRow) -> String {
    format!(
        "{:<24} {:<5} {:>8} {:>10} {:>8} {:>6} {:>6} {:>4}\n",
        row.name,
        row.plan_type_label,
        format!("${}", row.monthly_premium),
        format!("${}", row.individual_deductible),
        format!("${}", row.individual_oop_max),
        format!("${}", row.pcp_copay),
        format!("${}", row.generic_rx),
        if row.hsa_eligible { "yes" } else { "no" }
    )
}
