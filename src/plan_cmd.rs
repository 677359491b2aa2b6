//! Plan command: build and display the reading schedule.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wird_plan::build_plan;

use crate::cli::PlanArgs;
use crate::config;
use crate::convert;
use crate::render;

/// Run the schedule construction pipeline.
pub fn run(args: PlanArgs) -> Result<()> {
    let _cmd = info_span!("plan").entered();

    // 1. Load project TOML
    let mut config = config::load_or_default(&args.config)?;

    // 2. Apply CLI overrides
    convert::apply_overrides(&mut config.plan, &args.overrides);

    // 3. Build the schedule
    let per_cycle = convert::resolve_per_cycle(&config.plan)?;
    let plan_config = convert::build_plan_config(&config.plan)?;
    let plan = build_plan(&plan_config).context("failed to build schedule")?;
    info!(
        total = plan.total(),
        days = plan.days().len(),
        base = plan.base(),
        remainder = plan.remainder(),
        "schedule built"
    );

    // 4. Render
    print!("{}", render::render_plan(&plan, per_cycle, args.slots));

    // 5. Optional JSON output
    if let Some(ref path) = args.json {
        let json = serde_json::to_string_pretty(&plan).context("failed to serialize schedule")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write JSON: {}", path.display()))?;
        info!(path = %path.display(), "schedule written");
    }

    Ok(())
}
