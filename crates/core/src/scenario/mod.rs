//! Scenario module - bundled inputs, defaults and the service front.

mod scenario_defaults;
mod scenario_model;
mod scenario_service;
mod scenario_traits;

#[cfg(test)]
mod scenario_service_tests;

pub use scenario_model::{Scenario, ScenarioReport, SweepConfig};
pub use scenario_service::ScenarioService;
pub use scenario_traits::ScenarioServiceTrait;
