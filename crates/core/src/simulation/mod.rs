//! Simulation module - the monthly financial model.

mod simulation_calculator;
mod simulation_model;


pub use simulation_calculator::{break_even_revenue, compute};
pub(crate) use simulation_calculator::checked_mul;
pub use simulation_model::{FinancialResult, Metric, ProductResult, SimulationParameters};
