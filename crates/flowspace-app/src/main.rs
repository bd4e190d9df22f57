//! FlowSpace scenario driver.
//!
//! Loads a TOML scenario (a container plus a stream of floats, lines and
//! clears), flows it through a render space and prints where everything
//! landed as JSON. The scenario path comes from the first argument or
//! the `FLOWSPACE_SCENARIO` environment variable. A layout config file
//! named by `FLOWSPACE_CONFIG` replaces the scenario's `[layout]` table.

mod scenario;

use anyhow::{Context, Result};

use flowspace_types::config::FlowConfig;
use scenario::Scenario;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FLOWSPACE_SCENARIO").ok())
        .context("usage: flowspace <scenario.toml> (or set FLOWSPACE_SCENARIO)")?;

    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading scenario {path}"))?;
    let mut scenario =
        Scenario::from_toml_str(&text).with_context(|| format!("parsing scenario {path}"))?;
    if let Ok(config_path) = std::env::var("FLOWSPACE_CONFIG") {
        scenario.layout = FlowConfig::load(&config_path)
            .with_context(|| format!("loading layout config {config_path}"))?;
    }
    log::info!(
        "Flowing {} items through a {}-wide container",
        scenario.items.len(),
        scenario.layout.container_width,
    );

    let report = scenario::run(&scenario)?;
    log::info!("Content height: {}", report.content_height);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
