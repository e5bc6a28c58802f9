//! Crêp'Time Core - monthly profitability model for a crêpe and coffee shop.
//!
//! The crate is a set of pure computations: the financial model in
//! [`simulation`], return on investment in [`investment`], volume sweeps in
//! [`sweep`] and the bundled inputs in [`scenario`]. Rendering is left to
//! callers, which receive plain structured data.

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod investment;
pub mod scenario;
pub mod simulation;
pub mod sweep;
pub mod utils;

// Re-export the model's main entry points
pub use catalog::{Catalog, Charge, ChargeSet, Product};
pub use investment::{compute_roi, InvestmentResult, Payback};
pub use scenario::{Scenario, ScenarioReport};
pub use simulation::{compute, FinancialResult, Metric, SimulationParameters};
pub use sweep::{sweep, ProductMix, Sweep, SweepRow, UnitRange};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
