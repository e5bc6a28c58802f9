use log::debug;
use rust_decimal::Decimal;

use crate::catalog::{Catalog, ChargeSet};
use crate::errors::{Error, Result};
use crate::simulation::{FinancialResult, Metric, ProductResult, SimulationParameters};

/// Computes the monthly indicators for a catalog, its fixed charges and parameters.
///
/// Per product, revenue and cost are `unit amount * daily_orders * days_per_month`.
/// Tax applies to positive pre-tax profit only, so a loss is never reduced
/// further by a negative tax.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when the partner count is below one,
/// the day count is outside 1..=31, the tax rate is outside 0..=1, or any
/// price, cost, order count or charge is negative.
pub fn compute(
    catalog: &Catalog,
    charges: &ChargeSet,
    params: &SimulationParameters,
) -> Result<FinancialResult> {
    params.validate()?;
    catalog.validate()?;
    charges.validate("monthly charge")?;

    let days = Decimal::from(params.days_per_month);
    let mut products = Vec::with_capacity(catalog.len());
    let mut gross_revenue = Decimal::ZERO;
    let mut variable_cost = Decimal::ZERO;

    for product in catalog {
        let monthly_orders = checked_mul(product.daily_orders, days, "monthly orders")?;
        let revenue = checked_mul(product.unit_price, monthly_orders, "revenue")?;
        let cost = checked_mul(product.unit_cost, monthly_orders, "cost")?;

        gross_revenue = checked_add(gross_revenue, revenue, "gross revenue")?;
        variable_cost = checked_add(variable_cost, cost, "variable cost")?;

        products.push(ProductResult {
            name: product.name.clone(),
            revenue,
            cost,
            margin: revenue - cost,
        });
    }

    let fixed_cost = charges.total()?;
    let total_cost = checked_add(variable_cost, fixed_cost, "total cost")?;
    let pretax_profit = gross_revenue - total_cost;
    let tax = pretax_profit.max(Decimal::ZERO) * params.tax_rate;
    let net_profit = pretax_profit - tax;

    let partners = Decimal::from(params.partner_count);
    let profit_per_partner = net_profit / partners;
    let fixed_cost_per_partner = fixed_cost / partners;

    let break_even_revenue = break_even_revenue(gross_revenue, variable_cost, fixed_cost)?;

    debug!(
        "Simulated {} products over {} days: revenue {}, pre-tax {}, net {}",
        catalog.len(),
        params.days_per_month,
        gross_revenue,
        pretax_profit,
        net_profit
    );

    Ok(FinancialResult {
        products,
        gross_revenue,
        variable_cost,
        fixed_cost,
        total_cost,
        pretax_profit,
        tax,
        net_profit,
        profit_per_partner,
        fixed_cost_per_partner,
        break_even_revenue,
    })
}

/// Gross revenue at which pre-tax profit is zero, keeping the variable-cost ratio fixed.
///
/// Equivalent to `fixed_cost / (1 - variable_cost / gross_revenue)`. Not
/// applicable without revenue, or when variable costs absorb all revenue.
pub fn break_even_revenue(
    gross_revenue: Decimal,
    variable_cost: Decimal,
    fixed_cost: Decimal,
) -> Result<Metric> {
    let contribution = gross_revenue - variable_cost;
    if gross_revenue <= Decimal::ZERO || contribution <= Decimal::ZERO {
        return Ok(Metric::NotApplicable);
    }
    let scaled = checked_mul(fixed_cost, gross_revenue, "break-even revenue")?;
    scaled
        .checked_div(contribution)
        .map(Metric::Value)
        .ok_or_else(|| Error::overflow("break-even revenue"))
}

pub(crate) fn checked_mul(a: Decimal, b: Decimal, what: &str) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| Error::overflow(what))
}

pub(crate) fn checked_add(a: Decimal, b: Decimal, what: &str) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| Error::overflow(what))
}
