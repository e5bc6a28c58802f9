//! Sweep module - reruns the financial model over a range of daily volumes.

mod sweep_calculator;
mod sweep_model;


pub use sweep_calculator::{sweep, Sweep, SweepIter};
pub use sweep_model::{ProductMix, SweepRow, UnitRange};
