//! Scenario domain models.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Catalog, ChargeSet};
use crate::errors::{Error, Result};
use crate::investment::{self, InvestmentResult, PartnerContribution};
use crate::simulation::{self, FinancialResult, SimulationParameters};
use crate::sweep::{self, ProductMix, SweepRow, UnitRange};

/// Sweep settings attached to a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfig {
    pub range: UnitRange,
    #[serde(default)]
    pub mix: ProductMix,
}

/// Every input of one profitability estimate.
///
/// A scenario is owned by the caller and passed in whole on each
/// evaluation; nothing is remembered between evaluations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub catalog: Catalog,
    #[serde(default)]
    pub monthly_charges: ChargeSet,
    #[serde(default)]
    pub investment_charges: ChargeSet,
    pub params: SimulationParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepConfig>,
}

/// Everything derived from a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub financial: FinancialResult,
    pub investment: InvestmentResult,
    pub partners: PartnerContribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Vec<SweepRow>>,
}

impl Scenario {
    /// Reads a scenario from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::InvalidConfigValue(format!("{}: {}", path.display(), e)))
    }

    pub fn evaluate(&self) -> Result<ScenarioReport> {
        let financial = simulation::compute(&self.catalog, &self.monthly_charges, &self.params)?;
        let investment = investment::compute_roi(&self.investment_charges, financial.net_profit)?;
        let partners = investment::partner_contributions(
            &self.monthly_charges,
            &self.investment_charges,
            &self.params,
        )?;
        let sweep = match &self.sweep {
            Some(config) => Some(
                sweep::sweep(
                    &config.mix,
                    &self.catalog,
                    config.range,
                    &self.monthly_charges,
                    &self.params,
                )?
                .collect_rows()?,
            ),
            None => None,
        };

        debug!(
            "Evaluated scenario with {} products: net profit {}",
            self.catalog.len(),
            financial.net_profit
        );

        Ok(ScenarioReport {
            financial,
            investment,
            partners,
            sweep,
        })
    }
}
