//! Sweep domain models.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::constants::{MAX_SWEEP_POINTS, MIX_SHARE_TOLERANCE};
use crate::errors::{Error, Result};
use crate::simulation::FinancialResult;

/// Inclusive range of total daily units.
///
/// Points are `min, min + step, ...` up to the largest point not above
/// `max`. When `step` does not divide `max - min`, `max` itself is skipped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl UnitRange {
    pub fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        UnitRange { min, max, step }
    }

    /// Number of points in the range after validation.
    pub fn point_count(&self) -> Result<usize> {
        if self.min.is_sign_negative() && !self.min.is_zero() {
            return Err(Error::invalid(format!(
                "sweep minimum must not be negative (got {})",
                self.min
            )));
        }
        if self.step <= Decimal::ZERO {
            return Err(Error::invalid(format!(
                "sweep step must be positive (got {})",
                self.step
            )));
        }
        if self.min > self.max {
            return Err(Error::invalid(format!(
                "sweep minimum {} is above maximum {}",
                self.min, self.max
            )));
        }
        let count = (self.max - self.min)
            .checked_div(self.step)
            .and_then(|intervals| intervals.floor().to_usize())
            .and_then(|n| n.checked_add(1))
            .filter(|n| *n <= MAX_SWEEP_POINTS)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "sweep from {} to {} by {} exceeds {} points",
                    self.min, self.max, self.step, MAX_SWEEP_POINTS
                ))
            })?;
        Ok(count)
    }

    pub(crate) fn point(&self, index: usize) -> Decimal {
        self.min + self.step * Decimal::from(index)
    }
}

/// How a total number of daily units is split across the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProductMix {
    /// Ratios follow each product's share of the catalog's daily orders.
    #[default]
    Baseline,
    /// Explicit share per product name; shares sum to one, absent products get zero.
    Explicit { shares: HashMap<String, Decimal> },
    /// `first_share` goes to `first_group`, the rest to the remaining products,
    /// split evenly inside each group.
    #[serde(rename_all = "camelCase")]
    TwoGroups {
        first_group: Vec<String>,
        first_share: Decimal,
    },
}

impl ProductMix {
    pub fn two_groups<S: Into<String>>(first_group: Vec<S>, first_share: Decimal) -> Self {
        ProductMix::TwoGroups {
            first_group: first_group.into_iter().map(Into::into).collect(),
            first_share,
        }
    }

    /// Share of each product, in catalog order.
    pub fn ratios(&self, catalog: &Catalog) -> Result<Vec<Decimal>> {
        match self {
            ProductMix::Baseline => {
                let total = catalog.total_daily_orders()?;
                if total <= Decimal::ZERO {
                    return Err(Error::invalid(
                        "baseline mix needs at least one product with daily orders",
                    ));
                }
                Ok(catalog.iter().map(|p| p.daily_orders / total).collect())
            }
            ProductMix::Explicit { shares } => {
                let mut sum = Decimal::ZERO;
                for (name, share) in shares {
                    if catalog.get(name).is_none() {
                        return Err(Error::invalid(format!(
                            "mix refers to unknown product '{}'",
                            name
                        )));
                    }
                    if share.is_sign_negative() && !share.is_zero() {
                        return Err(Error::invalid(format!(
                            "share of '{}' must not be negative (got {})",
                            name, share
                        )));
                    }
                    sum = sum
                        .checked_add(*share)
                        .ok_or_else(|| Error::overflow("product shares"))?;
                }
                ensure_unit_sum(sum)?;
                Ok(catalog
                    .iter()
                    .map(|p| shares.get(&p.name).copied().unwrap_or(Decimal::ZERO))
                    .collect())
            }
            ProductMix::TwoGroups {
                first_group,
                first_share,
            } => {
                if *first_share < Decimal::ZERO || *first_share > Decimal::ONE {
                    return Err(Error::invalid(format!(
                        "group share must be between 0 and 1 (got {})",
                        first_share
                    )));
                }
                let members: HashSet<&str> = first_group.iter().map(String::as_str).collect();
                if let Some(unknown) = members.iter().find(|name| catalog.get(name).is_none()) {
                    return Err(Error::invalid(format!(
                        "mix refers to unknown product '{}'",
                        unknown
                    )));
                }
                let first_len = members.len();
                let second_len = catalog.len() - first_len;
                let second_share = Decimal::ONE - *first_share;
                if first_len == 0 && !first_share.is_zero() {
                    return Err(Error::invalid("first product group is empty"));
                }
                if second_len == 0 && !second_share.is_zero() {
                    return Err(Error::invalid("second product group is empty"));
                }
                Ok(catalog
                    .iter()
                    .map(|p| {
                        if members.contains(p.name.as_str()) {
                            *first_share / Decimal::from(first_len)
                        } else {
                            second_share / Decimal::from(second_len)
                        }
                    })
                    .collect())
            }
        }
    }
}

fn ensure_unit_sum(sum: Decimal) -> Result<()> {
    if (sum - Decimal::ONE).abs() > MIX_SHARE_TOLERANCE {
        return Err(Error::invalid(format!(
            "product shares must sum to 1 (got {})",
            sum
        )));
    }
    Ok(())
}

/// One step of a sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub total_units: Decimal,
    /// Contribution margin per unit sold; `None` when no unit is sold.
    pub average_unit_margin: Option<Decimal>,
    pub result: FinancialResult,
}
