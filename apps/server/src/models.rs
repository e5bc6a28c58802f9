use creptime_core::{Catalog, ChargeSet, ProductMix, SimulationParameters, UnitRange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs of a single monthly simulation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub products: Catalog,
    #[serde(default)]
    pub charges: ChargeSet,
    pub params: SimulationParameters,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRequest {
    #[serde(default)]
    pub investment_charges: ChargeSet,
    pub net_profit: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    pub products: Catalog,
    #[serde(default)]
    pub charges: ChargeSet,
    pub params: SimulationParameters,
    pub range: UnitRange,
    #[serde(default)]
    pub mix: ProductMix,
}
