use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::{CatalogError, PlanCatalog};
use crate::advisor::domain::{
    CostModel, Copays, HealthPlan, PlanId, PlanType, Premium, RxTiers, TierAmount,
};

/// Builds a [`PlanCatalog`] from a flat CSV export, one plan per row.
pub struct PlanCatalogImporter;

impl PlanCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PlanCatalog, CatalogImportError> {
        let file = File::open(path.as_ref()).map_err(|source| CatalogImportError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<PlanCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut plans = Vec::new();

        for record in csv_reader.deserialize::<PlanRow>() {
            let row = record?;
            plans.push(row.into_plan()?);
        }

        Ok(PlanCatalog::new(plans)?)
    }
}

#[derive(Debug, Deserialize)]
struct PlanRow {
    id: String,
    name: String,
    plan_type: String,
    premium_monthly: u32,
    premium_annual: u32,
    deductible_individual: u32,
    deductible_family: u32,
    oop_max_individual: u32,
    oop_max_family: u32,
    coinsurance: u8,
    copay_pcp: u32,
    copay_specialist: u32,
    copay_er: u32,
    copay_urgent_care: u32,
    rx_generic: u32,
    rx_preferred: u32,
    rx_non_preferred: u32,
    rx_specialty: u32,
    #[serde(deserialize_with = "flexible_bool")]
    hsa_eligible: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cost_model: Option<String>,
    #[serde(default)]
    highlights: String,
}

impl PlanRow {
    fn into_plan(self) -> Result<HealthPlan, CatalogImportError> {
        let plan_type = parse_plan_type(&self.plan_type).ok_or_else(|| {
            CatalogImportError::UnknownPlanType {
                plan_id: self.id.clone(),
                value: self.plan_type.clone(),
            }
        })?;

        // Exports that predate the explicit column carry the old convention: a $0 PCP copay
        // marks a deductible-first plan.
        let cost_model = match self.cost_model.as_deref() {
            Some(raw) => {
                parse_cost_model(raw).ok_or_else(|| CatalogImportError::UnknownCostModel {
                    plan_id: self.id.clone(),
                    value: raw.to_string(),
                })?
            }
            None if self.copay_pcp == 0 => CostModel::DeductibleFirst,
            None => CostModel::FlatCopay,
        };

        let highlights = self
            .highlights
            .split('|')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        Ok(HealthPlan {
            id: PlanId(self.id),
            name: self.name,
            plan_type,
            cost_model,
            premium: Premium {
                monthly: self.premium_monthly,
                annual: self.premium_annual,
            },
            deductible: TierAmount {
                individual: self.deductible_individual,
                family: self.deductible_family,
            },
            oop_max: TierAmount {
                individual: self.oop_max_individual,
                family: self.oop_max_family,
            },
            coinsurance: self.coinsurance,
            copays: Copays {
                pcp: self.copay_pcp,
                specialist: self.copay_specialist,
                er: self.copay_er,
                urgent_care: self.copay_urgent_care,
            },
            rx_tiers: RxTiers {
                generic: self.rx_generic,
                preferred: self.rx_preferred,
                non_preferred: self.rx_non_preferred,
                specialty: self.rx_specialty,
            },
            hsa_eligible: self.hsa_eligible,
            highlights,
        })
    }
}

fn parse_plan_type(raw: &str) -> Option<PlanType> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HMO" => Some(PlanType::Hmo),
        "PPO" => Some(PlanType::Ppo),
        "EPO" => Some(PlanType::Epo),
        "HDHP" => Some(PlanType::Hdhp),
        _ => None,
    }
}

fn parse_cost_model(raw: &str) -> Option<CostModel> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "flat_copay" | "copay" => Some(CostModel::FlatCopay),
        "deductible_first" | "deductible" => Some(CostModel::DeductibleFirst),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, got '{other}'"
        ))),
    }
}

/// Failure while loading a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("unable to open plan catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed plan catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("plan '{plan_id}' has unknown plan type '{value}'")]
    UnknownPlanType { plan_id: String, value: String },
    #[error("plan '{plan_id}' has unknown cost model '{value}'")]
    UnknownCostModel { plan_id: String, value: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
