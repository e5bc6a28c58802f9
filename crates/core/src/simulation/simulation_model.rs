//! Simulation domain models.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DAYS_PER_MONTH, MAX_DAYS_PER_MONTH, MIN_DAYS_PER_MONTH};
use crate::errors::{Error, Result};
use crate::utils::time_utils;

/// Scalar inputs of a monthly simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub days_per_month: u32,
    /// Flat rate between 0 and 1, applied to positive pre-tax profit only.
    pub tax_rate: Decimal,
    pub partner_count: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            days_per_month: DEFAULT_DAYS_PER_MONTH,
            tax_rate: Decimal::ZERO,
            partner_count: 1,
        }
    }
}

impl SimulationParameters {
    pub fn new(days_per_month: u32, tax_rate: Decimal, partner_count: u32) -> Self {
        SimulationParameters {
            days_per_month,
            tax_rate,
            partner_count,
        }
    }

    /// Number of open days in a calendar month when the shop closes on `closed_weekdays`.
    pub fn open_days_in_month(year: i32, month: u32, closed_weekdays: &[Weekday]) -> Result<u32> {
        let days = time_utils::open_days_in_month(year, month, closed_weekdays)
            .ok_or_else(|| Error::invalid(format!("{}-{:02} is not a valid month", year, month)))?;
        if days < MIN_DAYS_PER_MONTH {
            return Err(Error::invalid(format!(
                "the shop has no open day in {}-{:02}",
                year, month
            )));
        }
        Ok(days)
    }

    pub fn validate(&self) -> Result<()> {
        if self.partner_count < 1 {
            return Err(Error::invalid("partner count must be at least 1"));
        }
        if !(MIN_DAYS_PER_MONTH..=MAX_DAYS_PER_MONTH).contains(&self.days_per_month) {
            return Err(Error::invalid(format!(
                "days per month must be between {} and {} (got {})",
                MIN_DAYS_PER_MONTH, MAX_DAYS_PER_MONTH, self.days_per_month
            )));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(Error::invalid(format!(
                "tax rate must be between 0 and 1 (got {})",
                self.tax_rate
            )));
        }
        Ok(())
    }
}

/// A ratio that may be undefined for the given inputs.
///
/// `NotApplicable` is distinct from zero and is never produced by dividing
/// by zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Metric {
    Value(Decimal),
    NotApplicable,
}

impl Metric {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Metric::Value(_))
    }
}

impl From<Option<Decimal>> for Metric {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Metric::NotApplicable, Metric::Value)
    }
}

/// Monthly figures for a single product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResult {
    pub name: String,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub margin: Decimal,
}

/// Monthly indicators derived from a catalog, its charges and parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialResult {
    pub products: Vec<ProductResult>,
    pub gross_revenue: Decimal,
    pub variable_cost: Decimal,
    pub fixed_cost: Decimal,
    pub total_cost: Decimal,
    pub pretax_profit: Decimal,
    pub tax: Decimal,
    pub net_profit: Decimal,
    pub profit_per_partner: Decimal,
    /// Each partner's share of the monthly fixed charges.
    pub fixed_cost_per_partner: Decimal,
    /// Gross revenue at which pre-tax profit is zero.
    pub break_even_revenue: Metric,
}

impl FinancialResult {
    pub fn product(&self, name: &str) -> Option<&ProductResult> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Gross margin on variable costs, before fixed charges.
    pub fn contribution_margin(&self) -> Decimal {
        self.gross_revenue - self.variable_cost
    }
}
