use log::debug;
use rust_decimal::Decimal;
use std::iter::FusedIterator;

use super::sweep_model::{ProductMix, SweepRow, UnitRange};
use crate::catalog::{Catalog, ChargeSet};
use crate::errors::{Error, Result};
use crate::simulation::{checked_mul, compute, SimulationParameters};

/// A validated sweep over total daily units.
///
/// Rows are computed lazily. Every call to [`Sweep::iter`] starts again from
/// the first point, so a sweep can be replayed any number of times.
#[derive(Debug, Clone)]
pub struct Sweep {
    catalog: Catalog,
    ratios: Vec<Decimal>,
    charges: ChargeSet,
    params: SimulationParameters,
    range: UnitRange,
    len: usize,
}

/// Builds a sweep that reruns the financial model for each total in `range`,
/// distributing the total across products according to `mix`.
///
/// All inputs are validated up front; invalid ranges, mixes or parameters
/// fail here rather than midway through iteration.
pub fn sweep(
    mix: &ProductMix,
    catalog: &Catalog,
    range: UnitRange,
    charges: &ChargeSet,
    params: &SimulationParameters,
) -> Result<Sweep> {
    Sweep::new(mix, catalog, range, charges, params)
}

impl Sweep {
    pub fn new(
        mix: &ProductMix,
        catalog: &Catalog,
        range: UnitRange,
        charges: &ChargeSet,
        params: &SimulationParameters,
    ) -> Result<Self> {
        params.validate()?;
        catalog.validate()?;
        charges.validate("monthly charge")?;
        let len = range.point_count()?;
        let ratios = mix.ratios(catalog)?;

        debug!(
            "Prepared sweep of {} points from {} to {} by {}",
            len, range.min, range.max, range.step
        );

        Ok(Sweep {
            catalog: catalog.clone(),
            ratios,
            charges: charges.clone(),
            params: params.clone(),
            range,
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> UnitRange {
        self.range
    }

    /// Share of daily units assigned to each product, in catalog order.
    pub fn ratios(&self) -> &[Decimal] {
        &self.ratios
    }

    pub fn iter(&self) -> SweepIter<'_> {
        SweepIter {
            sweep: self,
            next: 0,
        }
    }

    /// Computes every row, stopping at the first failure.
    pub fn collect_rows(&self) -> Result<Vec<SweepRow>> {
        self.iter().collect()
    }

    fn row_at(&self, index: usize) -> Result<SweepRow> {
        let total_units = self.range.point(index);
        let daily_orders = self
            .ratios
            .iter()
            .map(|ratio| checked_mul(total_units, *ratio, "daily orders"))
            .collect::<Result<Vec<_>>>()?;
        let catalog = self.catalog.with_daily_orders(&daily_orders);
        let result = compute(&catalog, &self.charges, &self.params)?;

        let average_unit_margin = if total_units.is_zero() {
            None
        } else {
            let monthly_units = checked_mul(
                total_units,
                Decimal::from(self.params.days_per_month),
                "monthly units",
            )?;
            Some(
                result
                    .contribution_margin()
                    .checked_div(monthly_units)
                    .ok_or_else(|| Error::overflow("average unit margin"))?,
            )
        };

        Ok(SweepRow {
            total_units,
            average_unit_margin,
            result,
        })
    }
}

impl<'a> IntoIterator for &'a Sweep {
    type Item = Result<SweepRow>;
    type IntoIter = SweepIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rows of a [`Sweep`].
#[derive(Debug, Clone)]
pub struct SweepIter<'a> {
    sweep: &'a Sweep,
    next: usize,
}

impl Iterator for SweepIter<'_> {
    type Item = Result<SweepRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.sweep.len {
            return None;
        }
        let row = self.sweep.row_at(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sweep.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepIter<'_> {}

impl FusedIterator for SweepIter<'_> {}
