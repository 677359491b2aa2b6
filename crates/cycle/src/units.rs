//! Canonical unit schemes for reading the mushaf.

/// Unit scheme a schedule counts in.
///
/// Each scheme carries the canonical number of units in one complete
/// read-through, which doubles as the formatter's cycle size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Pages of the standard 604-page mushaf.
    Pages,
    /// Verses, in the 6236-verse Kufan count.
    Verses,
    /// Juz: the thirty parts.
    Juz,
    /// Hizb: the sixty half-juz parts.
    Hizb,
}

impl UnitKind {
    /// All schemes in display order.
    pub const ALL: [UnitKind; 4] = [Self::Pages, Self::Verses, Self::Juz, Self::Hizb];

    /// Returns the number of units in one complete read-through.
    pub fn per_cycle(self) -> u32 {
        match self {
            Self::Pages => 604,
            Self::Verses => 6236,
            Self::Juz => 30,
            Self::Hizb => 60,
        }
    }

    /// Returns the lowercase display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Verses => "verses",
            Self::Juz => "juz",
            Self::Hizb => "hizb",
        }
    }

    /// Parses a label as produced by [`label`](Self::label).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "pages" => Some(Self::Pages),
            "verses" => Some(Self::Verses),
            "juz" => Some(Self::Juz),
            "hizb" => Some(Self::Hizb),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_cycle_values() {
        assert_eq!(UnitKind::Pages.per_cycle(), 604);
        assert_eq!(UnitKind::Verses.per_cycle(), 6236);
        assert_eq!(UnitKind::Juz.per_cycle(), 30);
        assert_eq!(UnitKind::Hizb.per_cycle(), 60);
    }

    #[test]
    fn label_round_trip() {
        for kind in UnitKind::ALL {
            assert_eq!(UnitKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn unknown_label() {
        assert_eq!(UnitKind::from_label("chapters"), None);
        assert_eq!(UnitKind::from_label(""), None);
        // Matching is exact: no case folding.
        assert_eq!(UnitKind::from_label("Pages"), None);
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<UnitKind>();
        assert_hash::<UnitKind>();
    }
}
