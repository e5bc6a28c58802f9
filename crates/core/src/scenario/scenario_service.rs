use log::{debug, warn};
use rust_decimal::Decimal;

use super::scenario_model::{Scenario, ScenarioReport};
use super::scenario_traits::ScenarioServiceTrait;
use crate::catalog::{Catalog, ChargeSet};
use crate::errors::Result;
use crate::investment::{self, InvestmentResult};
use crate::simulation::{self, FinancialResult, SimulationParameters};
use crate::sweep::{self, ProductMix, SweepRow, UnitRange};

/// Stateless front for the profitability model.
///
/// Only the default scenario handed out to new sessions is kept; every
/// computation works on the inputs passed to it.
pub struct ScenarioService {
    default_scenario: Scenario,
}

impl ScenarioService {
    pub fn new(default_scenario: Scenario) -> Self {
        ScenarioService { default_scenario }
    }
}

impl Default for ScenarioService {
    fn default() -> Self {
        ScenarioService::new(Scenario::creptime_default())
    }
}

impl ScenarioServiceTrait for ScenarioService {
    fn default_scenario(&self) -> Scenario {
        self.default_scenario.clone()
    }

    fn simulate(
        &self,
        catalog: &Catalog,
        charges: &ChargeSet,
        params: &SimulationParameters,
    ) -> Result<FinancialResult> {
        simulation::compute(catalog, charges, params).inspect_err(|e| {
            warn!("Simulation rejected: {}", e);
        })
    }

    fn compute_investment(
        &self,
        investment_charges: &ChargeSet,
        net_profit: Decimal,
    ) -> Result<InvestmentResult> {
        investment::compute_roi(investment_charges, net_profit)
    }

    fn sweep(
        &self,
        mix: &ProductMix,
        catalog: &Catalog,
        range: UnitRange,
        charges: &ChargeSet,
        params: &SimulationParameters,
    ) -> Result<Vec<SweepRow>> {
        let sweep = sweep::sweep(mix, catalog, range, charges, params).inspect_err(|e| {
            warn!("Sweep rejected: {}", e);
        })?;
        let rows = sweep.collect_rows()?;
        debug!("Sweep produced {} rows", rows.len());
        Ok(rows)
    }

    fn evaluate(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        scenario.evaluate()
    }
}
