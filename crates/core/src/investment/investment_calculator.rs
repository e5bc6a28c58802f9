use log::debug;
use rust_decimal::Decimal;

use super::investment_model::{InvestmentResult, PartnerContribution, Payback};
use crate::catalog::ChargeSet;
use crate::constants::{MONTHS_PER_YEAR, PERCENT};
use crate::errors::{Error, Result};
use crate::simulation::{Metric, SimulationParameters};

/// Computes return on investment and payback period from a monthly net profit.
///
/// Without investment, ROI and payback are [`Metric::NotApplicable`] and
/// [`Payback::NotApplicable`]. Payback is [`Payback::Unreachable`] when the
/// monthly net profit is not positive.
pub fn compute_roi(investment_charges: &ChargeSet, net_profit: Decimal) -> Result<InvestmentResult> {
    investment_charges.validate("investment")?;
    let total_investment = investment_charges.total()?;

    if total_investment.is_zero() {
        debug!("No investment recorded; ROI and payback not applicable");
        return Ok(InvestmentResult {
            total_investment,
            monthly_roi_pct: Metric::NotApplicable,
            annual_roi_pct: Metric::NotApplicable,
            payback_months: Payback::NotApplicable,
        });
    }

    let monthly_ratio = net_profit
        .checked_div(total_investment)
        .ok_or_else(|| Error::overflow("monthly ROI"))?;
    let monthly_roi_pct = monthly_ratio
        .checked_mul(PERCENT)
        .ok_or_else(|| Error::overflow("monthly ROI"))?;
    let annual_roi_pct = monthly_roi_pct
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| Error::overflow("annual ROI"))?;

    let payback_months = if net_profit > Decimal::ZERO {
        total_investment
            .checked_div(net_profit)
            .map(Payback::Months)
            .ok_or_else(|| Error::overflow("payback period"))?
    } else {
        Payback::Unreachable
    };

    Ok(InvestmentResult {
        total_investment,
        monthly_roi_pct: Metric::Value(monthly_roi_pct),
        annual_roi_pct: Metric::Value(annual_roi_pct),
        payback_months,
    })
}

/// Splits the initial investment and the monthly charges evenly between partners.
pub fn partner_contributions(
    monthly_charges: &ChargeSet,
    investment_charges: &ChargeSet,
    params: &SimulationParameters,
) -> Result<PartnerContribution> {
    if params.partner_count < 1 {
        return Err(Error::invalid("partner count must be at least 1"));
    }
    monthly_charges.validate("monthly charge")?;
    investment_charges.validate("investment")?;

    let partners = Decimal::from(params.partner_count);
    Ok(PartnerContribution {
        partner_count: params.partner_count,
        investment_per_partner: investment_charges.total()? / partners,
        monthly_charges_per_partner: monthly_charges.total()? / partners,
    })
}
