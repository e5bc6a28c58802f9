use rust_decimal::Decimal;

use super::scenario_model::{Scenario, ScenarioReport};
use crate::catalog::{Catalog, ChargeSet};
use crate::errors::Result;
use crate::investment::InvestmentResult;
use crate::simulation::{FinancialResult, SimulationParameters};
use crate::sweep::{ProductMix, SweepRow, UnitRange};

/// Trait for profitability estimation operations
pub trait ScenarioServiceTrait: Send + Sync {
    fn default_scenario(&self) -> Scenario;
    fn simulate(
        &self,
        catalog: &Catalog,
        charges: &ChargeSet,
        params: &SimulationParameters,
    ) -> Result<FinancialResult>;
    fn compute_investment(
        &self,
        investment_charges: &ChargeSet,
        net_profit: Decimal,
    ) -> Result<InvestmentResult>;
    fn sweep(
        &self,
        mix: &ProductMix,
        catalog: &Catalog,
        range: UnitRange,
        charges: &ChargeSet,
        params: &SimulationParameters,
    ) -> Result<Vec<SweepRow>>;
    fn evaluate(&self, scenario: &Scenario) -> Result<ScenarioReport>;
}
