use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level wird configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WirdConfig {
    /// Schedule settings.
    #[serde(default)]
    pub plan: PlanToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Overrides the named unit's canonical per-cycle count.
    #[serde(default)]
    pub per_cycle: Option<u32>,
    #[serde(default = "default_khatam")]
    pub khatam: u8,
    #[serde(default = "default_periods")]
    pub periods: u16,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_slots_per_day")]
    pub slots_per_day: u8,
    #[serde(default = "default_true")]
    pub distribute_remainder: bool,
}

impl Default for PlanToml {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            per_cycle: None,
            khatam: default_khatam(),
            periods: default_periods(),
            mode: default_mode(),
            slots_per_day: default_slots_per_day(),
            distribute_remainder: true,
        }
    }
}

fn default_unit() -> String {
    "pages".to_string()
}
fn default_khatam() -> u8 {
    1
}
fn default_periods() -> u16 {
    30
}
fn default_mode() -> String {
    "per-day".to_string()
}
fn default_slots_per_day() -> u8 {
    5
}
fn default_true() -> bool {
    true
}

/// Loads the TOML configuration, falling back to defaults when the
/// file does not exist.
pub fn load_or_default(path: &Path) -> Result<WirdConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(WirdConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
