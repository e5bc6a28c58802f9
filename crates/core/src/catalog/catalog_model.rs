//! Product catalog and charge set domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{Error, Result, ValidationError};

/// One menu item with its unit economics and expected daily volume.
///
/// `unit_cost` may exceed `unit_price`: a loss-making product is a valid
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub unit_price: Decimal,
    pub unit_cost: Decimal,
    /// Orders per open day. Fractional when a sweep splits a total across products.
    pub daily_orders: Decimal,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        unit_cost: Decimal,
        daily_orders: Decimal,
    ) -> Self {
        Product {
            name: name.into(),
            unit_price,
            unit_cost,
            daily_orders,
        }
    }

    pub fn unit_margin(&self) -> Decimal {
        self.unit_price - self.unit_cost
    }

    /// Same product with a different daily volume.
    pub fn with_daily_orders(&self, daily_orders: Decimal) -> Self {
        Product {
            daily_orders,
            ..self.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let fields = [
            ("unit price", self.unit_price),
            ("unit cost", self.unit_cost),
            ("daily orders", self.daily_orders),
        ];
        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(Error::invalid(format!(
                    "{} of product '{}' must not be negative (got {})",
                    field, self.name, value
                )));
            }
        }
        Ok(())
    }
}

/// Ordered set of products keyed by name.
///
/// Insertion order only drives display order. Names are unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(ValidationError::MissingField("name".to_string()).into());
            }
            if !seen.insert(product.name.as_str()) {
                return Err(ValidationError::DuplicateEntry(product.name.clone()).into());
            }
        }
        Ok(Catalog { products })
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn total_daily_orders(&self) -> Result<Decimal> {
        self.products.iter().try_fold(Decimal::ZERO, |acc, p| {
            acc.checked_add(p.daily_orders)
                .ok_or_else(|| Error::overflow("total daily orders"))
        })
    }

    /// Rebuilds the catalog with new daily volumes, one per product in catalog order.
    pub(crate) fn with_daily_orders(&self, daily_orders: &[Decimal]) -> Catalog {
        debug_assert_eq!(daily_orders.len(), self.products.len());
        Catalog {
            products: self
                .products
                .iter()
                .zip(daily_orders)
                .map(|(product, orders)| product.with_daily_orders(*orders))
                .collect(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.products.iter().try_for_each(Product::validate)
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = Error;

    fn try_from(products: Vec<Product>) -> Result<Self> {
        Catalog::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// A labelled monetary amount (rent, salaries, equipment...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub label: String,
    pub amount: Decimal,
}

impl Charge {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Charge {
            label: label.into(),
            amount,
        }
    }
}

/// Ordered mapping from charge label to amount.
///
/// Used both for recurring monthly charges and for one-time investment
/// costs. The two sets are kept apart and never summed together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Charge>", into = "Vec<Charge>")]
pub struct ChargeSet {
    charges: Vec<Charge>,
}

impl ChargeSet {
    pub fn new(charges: Vec<Charge>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(charges.len());
        for charge in &charges {
            if charge.label.trim().is_empty() {
                return Err(ValidationError::MissingField("label".to_string()).into());
            }
            if !seen.insert(charge.label.as_str()) {
                return Err(ValidationError::DuplicateEntry(charge.label.clone()).into());
            }
        }
        Ok(ChargeSet { charges })
    }

    pub fn from_amounts<I, S>(amounts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        ChargeSet::new(
            amounts
                .into_iter()
                .map(|(label, amount)| Charge::new(label, amount))
                .collect(),
        )
    }

    /// Sets the amount for `label`, returning the previous amount if the label existed.
    pub fn insert(&mut self, label: impl Into<String>, amount: Decimal) -> Option<Decimal> {
        let label = label.into();
        match self.charges.iter_mut().find(|c| c.label == label) {
            Some(existing) => Some(std::mem::replace(&mut existing.amount, amount)),
            None => {
                self.charges.push(Charge { label, amount });
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.charges
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.amount)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Charge> {
        self.charges.iter()
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Sum of all amounts.
    pub fn total(&self) -> Result<Decimal> {
        self.charges.iter().try_fold(Decimal::ZERO, |acc, c| {
            acc.checked_add(c.amount)
                .ok_or_else(|| Error::overflow("charge total"))
        })
    }

    pub(crate) fn validate(&self, kind: &str) -> Result<()> {
        match self
            .charges
            .iter()
            .find(|c| c.amount.is_sign_negative() && !c.amount.is_zero())
        {
            Some(charge) => Err(Error::invalid(format!(
                "{} '{}' must not be negative (got {})",
                kind, charge.label, charge.amount
            ))),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<Charge>> for ChargeSet {
    type Error = Error;

    fn try_from(charges: Vec<Charge>) -> Result<Self> {
        ChargeSet::new(charges)
    }
}

impl From<ChargeSet> for Vec<Charge> {
    fn from(set: ChargeSet) -> Self {
        set.charges
    }
}

impl<'a> IntoIterator for &'a ChargeSet {
    type Item = &'a Charge;
    type IntoIter = std::slice::Iter<'a, Charge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.iter()
    }
}
