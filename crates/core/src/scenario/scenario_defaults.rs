//! Bundled default scenario.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::scenario_model::{Scenario, SweepConfig};
use crate::catalog::{Catalog, Charge, ChargeSet, Product};
use crate::constants::DEFAULT_DAYS_PER_MONTH;
use crate::simulation::SimulationParameters;
use crate::sweep::{ProductMix, UnitRange};

/// name, unit price, unit cost, daily orders
const DEFAULT_PRODUCTS: [(&str, Decimal, Decimal, Decimal); 2] = [
    ("Crêpe", dec!(30), dec!(10), dec!(60)),
    ("Café", dec!(12), dec!(3), dec!(40)),
];

const DEFAULT_MONTHLY_CHARGES: [(&str, Decimal); 6] = [
    ("Loyer", dec!(10000)),
    ("Salaires", dec!(4000)),
    ("Ménage", dec!(1000)),
    ("Électricité", dec!(1500)),
    ("Internet", dec!(500)),
    ("Publicité", dec!(500)),
];

const DEFAULT_INVESTMENT_CHARGES: [(&str, Decimal); 1] = [("Investissement initial", dec!(30000))];

const DEFAULT_TAX_RATE: Decimal = dec!(0.20);
const DEFAULT_PARTNER_COUNT: u32 = 6;

const DEFAULT_SWEEP: (Decimal, Decimal, Decimal) = (dec!(20), dec!(100), dec!(10));

fn charge_set(amounts: &[(&str, Decimal)]) -> ChargeSet {
    amounts
        .iter()
        .map(|(label, amount)| Charge::new(*label, *amount))
        .collect::<Vec<_>>()
        .try_into()
        .unwrap_or_default()
}

impl Scenario {
    /// The crêpe and coffee shop as first configured by its partners.
    pub fn creptime_default() -> Self {
        let products = DEFAULT_PRODUCTS
            .iter()
            .map(|(name, price, cost, orders)| Product::new(*name, *price, *cost, *orders))
            .collect();
        let (min, max, step) = DEFAULT_SWEEP;

        Scenario {
            catalog: Catalog::new(products).unwrap_or_default(),
            monthly_charges: charge_set(&DEFAULT_MONTHLY_CHARGES),
            investment_charges: charge_set(&DEFAULT_INVESTMENT_CHARGES),
            params: SimulationParameters::new(
                DEFAULT_DAYS_PER_MONTH,
                DEFAULT_TAX_RATE,
                DEFAULT_PARTNER_COUNT,
            ),
            sweep: Some(SweepConfig {
                range: UnitRange::new(min, max, step),
                mix: ProductMix::Baseline,
            }),
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::creptime_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_well_formed() {
        let products = DEFAULT_PRODUCTS
            .iter()
            .map(|(name, price, cost, orders)| Product::new(*name, *price, *cost, *orders))
            .collect();
        Catalog::new(products).unwrap().validate().unwrap();

        for table in [&DEFAULT_MONTHLY_CHARGES[..], &DEFAULT_INVESTMENT_CHARGES[..]] {
            let charges = table
                .iter()
                .map(|(label, amount)| Charge::new(*label, *amount))
                .collect();
            ChargeSet::new(charges).unwrap().validate("charge").unwrap();
        }

        let scenario = Scenario::creptime_default();
        assert_eq!(scenario.catalog.len(), DEFAULT_PRODUCTS.len());
        assert_eq!(scenario.monthly_charges.len(), DEFAULT_MONTHLY_CHARGES.len());
        assert_eq!(
            scenario.investment_charges.len(),
            DEFAULT_INVESTMENT_CHARGES.len()
        );
    }
}
