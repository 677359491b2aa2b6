//! Pure rendering of schedules and summaries to display text.

use wird_cycle::format_range;
use wird_plan::PlanResult;
use wird_progress::ProgressSummary;

/// Renders the schedule as a day-per-line table.
///
/// Ranges are shown relative to khatam cycles via `per_cycle`; days
/// (and, with `show_slots`, slots) without work render as `-`.
pub fn render_plan(plan: &PlanResult, per_cycle: u32, show_slots: bool) -> String {
    let label = plan.unit_label();
    let mut out = format!(
        "{} {} over {} days ({} slots)\n",
        plan.total(),
        label,
        plan.days().len(),
        plan.total_slots()
    );

    for day in plan.days() {
        let range = match day.range() {
            Some(r) => format_range(r.start(), r.end(), per_cycle),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "day {:>3}  {:<28} {:>5} {}\n",
            day.day(),
            range,
            day.total(),
            label
        ));
        if show_slots {
            for (position, slot) in day.slots().iter().enumerate() {
                let text = match slot.range() {
                    Some(r) => format_range(r.start(), r.end(), per_cycle),
                    None => "-".to_string(),
                };
                out.push_str(&format!("    slot {}  {}\n", position + 1, text));
            }
        }
    }

    out
}

/// Renders aggregated checklist progress.
pub fn render_status(summary: &ProgressSummary, unit_label: &str) -> String {
    format!(
        "days   {:>5} / {}\nslots  {:>5} / {}\n{:<6} {:>5} / {} ({:.1}%)\n",
        summary.days_complete(),
        summary.days_total(),
        summary.slots_complete(),
        summary.slots_total(),
        unit_label,
        summary.units_complete(),
        summary.units_total(),
        summary.fraction() * 100.0
    )
}
