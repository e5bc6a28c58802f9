//! Catalog module - products and labelled charge sets.

mod catalog_model;

#[cfg(test)]
mod catalog_model_tests;

pub use catalog_model::{Catalog, Charge, ChargeSet, Product};
