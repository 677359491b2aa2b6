//! Cycle-aware range rendering.

use crate::cycle::{cycle_of, position_of};

/// Renders the inclusive unit range `start..=end` relative to khatam
/// cycle boundaries.
///
/// Within a single cycle the range reads `"K{cycle} {from}–{to}"`.
/// A range that crosses a cycle boundary is rendered as one segment
/// per cycle touched, joined with `" + "`; intermediate cycles (only
/// possible when a single range spans more than one full read-through)
/// appear as full `1–cycle_size` segments. With `cycle_size` 0 the
/// plain `"{start}–{end}"` form is returned, as no cycle semantics
/// apply.
pub fn format_range(start: u32, end: u32, cycle_size: u32) -> String {
    if cycle_size == 0 {
        return format!("{start}\u{2013}{end}");
    }

    let first_cycle = cycle_of(start, cycle_size);
    let last_cycle = cycle_of(end, cycle_size);
    let first_pos = position_of(start, cycle_size);
    let last_pos = position_of(end, cycle_size);

    if first_cycle == last_cycle {
        return format!("K{first_cycle} {first_pos}\u{2013}{last_pos}");
    }

    let mut parts = Vec::with_capacity((last_cycle - first_cycle + 1) as usize);
    for cycle in first_cycle..=last_cycle {
        let from = if cycle == first_cycle { first_pos } else { 1 };
        let to = if cycle == last_cycle { last_pos } else { cycle_size };
        parts.push(format!("K{cycle} {from}\u{2013}{to}"));
    }
    parts.join(" + ")
}
