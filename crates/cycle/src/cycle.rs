//! Cycle index arithmetic for absolute unit positions.

/// Returns the 1-based cycle an absolute unit position falls in.
///
/// Position 1 through `cycle_size` is cycle 1, the next `cycle_size`
/// positions are cycle 2, and so on. A `cycle_size` of 0 means no
/// cycle semantics apply: everything reports cycle 1.
pub fn cycle_of(position: u32, cycle_size: u32) -> u32 {
    if cycle_size == 0 {
        return 1;
    }
    position.saturating_sub(1) / cycle_size + 1
}

/// Returns the 1-based position of an absolute unit within its cycle.
///
/// A `cycle_size` of 0 leaves the position unchanged.
pub fn position_of(position: u32, cycle_size: u32) -> u32 {
    if cycle_size == 0 {
        return position;
    }
    position.saturating_sub(1) % cycle_size + 1
}
