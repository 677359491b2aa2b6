//! Status command: checklist progress against the schedule.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wird_plan::build_plan;
use wird_progress::{Progress, summarize};

use crate::cli::StatusArgs;
use crate::config;
use crate::convert;
use crate::render;

/// Run the progress aggregation pipeline.
pub fn run(args: StatusArgs) -> Result<()> {
    let _cmd = info_span!("status").entered();

    // 1. Load project TOML and checklist
    let mut config = config::load_or_default(&args.config)?;
    convert::apply_overrides(&mut config.plan, &args.overrides);
    let progress = load_progress(&args.progress)?;

    // 2. Rebuild the schedule the checklist refers to
    let plan_config = convert::build_plan_config(&config.plan)?;
    let plan = build_plan(&plan_config).context("failed to build schedule")?;

    // 3. Aggregate and render
    let summary = summarize(&plan, &progress);
    info!(
        days_complete = summary.days_complete(),
        slots_complete = summary.slots_complete(),
        units_complete = summary.units_complete(),
        "progress aggregated"
    );
    print!("{}", render::render_status(&summary, plan.unit_label()));

    Ok(())
}

/// Loads the checklist JSON, starting empty when the file does not
/// exist yet.
fn load_progress(path: &Path) -> Result<Progress> {
    if !path.exists() {
        info!(path = %path.display(), "no checklist file, starting empty");
        return Ok(Progress::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read checklist: {}", path.display()))?;
    serde_json::from_str(&json).context("failed to parse checklist JSON")
}
