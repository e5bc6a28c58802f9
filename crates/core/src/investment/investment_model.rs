//! Investment and return-on-investment domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::simulation::Metric;

/// Time for cumulative net profit to cover the initial investment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "months", rename_all = "camelCase")]
pub enum Payback {
    Months(Decimal),
    /// Net profit is zero or negative: the investment is never recovered.
    Unreachable,
    /// There is nothing to pay back.
    NotApplicable,
}

impl Payback {
    pub fn months(&self) -> Option<Decimal> {
        match self {
            Payback::Months(m) => Some(*m),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub total_investment: Decimal,
    pub monthly_roi_pct: Metric,
    pub annual_roi_pct: Metric,
    pub payback_months: Payback,
}

/// How fixed charges and the initial investment are shared between partners.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContribution {
    pub partner_count: u32,
    pub investment_per_partner: Decimal,
    pub monthly_charges_per_partner: Decimal,
}
