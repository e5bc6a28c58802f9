use std::sync::Arc;

use crate::config::Config;
use anyhow::Context;
use creptime_core::scenario::{Scenario, ScenarioService, ScenarioServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub scenario_service: Arc<dyn ScenarioServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let default_scenario = match &config.scenario_path {
        Some(path) => {
            let scenario = Scenario::from_json_file(path)
                .with_context(|| format!("Failed to load scenario from {}", path.display()))?;
            tracing::info!("Default scenario loaded from {}", path.display());
            scenario
        }
        None => Scenario::creptime_default(),
    };

    // Reject a default scenario that cannot be evaluated before serving it.
    default_scenario
        .evaluate()
        .context("Default scenario is invalid")?;

    Ok(Arc::new(AppState {
        scenario_service: Arc::new(ScenarioService::new(default_scenario)),
    }))
}
