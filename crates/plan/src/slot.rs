//! Unit ranges and slots, the elementary pieces of a schedule.

use serde::Serialize;

/// A contiguous, 1-based inclusive range of reading units.
///
/// A `UnitRange` always covers at least one unit: only the allocator
/// constructs one, from bounds it has already proven to satisfy
/// `1 <= start <= end`. The "both bounds null" state of an unassigned
/// slot is expressed as `Option<UnitRange>` rather than a pair of
/// nullable numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UnitRange {
    start: u32,
    end: u32,
}

impl UnitRange {
    /// Creates a range from bounds the allocator has already proven valid.
    pub(crate) fn from_parts(start: u32, end: u32) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self { start, end }
    }

    /// Returns the 1-based inclusive start.
    pub fn start(self) -> u32 {
        self.start
    }

    /// Returns the 1-based inclusive end.
    pub fn end(self) -> u32 {
        self.end
    }

    /// Returns the number of units covered (`end - start + 1`).
    ///
    /// Never 0: an empty allocation has no `UnitRange` at all.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u32 {
        self.end - self.start + 1
    }
}

/// One elementary allocation: a 1-based schedule position plus the unit
/// range assigned to it, if any.
///
/// Slots after the point where the cumulative allocation reaches the
/// configured total carry no range and have size 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    index: u32,
    range: Option<UnitRange>,
}

impl Slot {
    pub(crate) fn new(index: u32, range: Option<UnitRange>) -> Self {
        Self { index, range }
    }

    /// Returns the 1-based position among all slots in the schedule.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Returns the assigned unit range, or `None` if the supply was
    /// exhausted before this slot.
    pub fn range(self) -> Option<UnitRange> {
        self.range
    }

    /// Returns the 1-based start of the assigned range, if any.
    pub fn start(self) -> Option<u32> {
        self.range.map(UnitRange::start)
    }

    /// Returns the 1-based end of the assigned range, if any.
    pub fn end(self) -> Option<u32> {
        self.range.map(UnitRange::end)
    }

    /// Returns the number of units assigned to this slot (0 when empty).
    pub fn size(self) -> u32 {
        self.range.map_or(0, UnitRange::len)
    }

    /// Returns `true` if no units are assigned to this slot.
    pub fn is_empty(self) -> bool {
        self.range.is_none()
    }
}
