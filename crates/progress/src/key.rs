//! Composite day/slot checklist keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// Identifies one slot of a schedule: a 1-based day number and the
/// 1-based slot position within that day.
///
/// Keys render as `"day:slot"` (for example `"3:2"` for the second
/// slot of day 3) and sort by day, then by position, which keeps
/// serialized checklists in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    day: u16,
    slot: u8,
}

impl SlotKey {
    /// Creates a key for the given day and within-day slot position.
    pub fn new(day: u16, slot: u8) -> Self {
        debug_assert!(day >= 1 && slot >= 1);
        Self { day, slot }
    }

    /// Returns the 1-based day number.
    pub fn day(self) -> u16 {
        self.day
    }

    /// Returns the 1-based slot position within the day.
    pub fn slot(self) -> u8 {
        self.slot
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.day, self.slot)
    }
}

impl FromStr for SlotKey {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProgressError::InvalidKey { key: s.to_string() };
        let (day, slot) = s.split_once(':').ok_or_else(invalid)?;
        let day: u16 = day.parse().map_err(|_| invalid())?;
        let slot: u8 = slot.parse().map_err(|_| invalid())?;
        if day == 0 || slot == 0 {
            return Err(invalid());
        }
        Ok(Self { day, slot })
    }
}

impl Serialize for SlotKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trip() {
        let key = SlotKey::new(3, 2);
        assert_eq!(key.to_string(), "3:2");
        assert_eq!("3:2".parse::<SlotKey>().unwrap(), key);
    }

    #[test]
    fn parse_bounds() {
        let key: SlotKey = "366:10".parse().unwrap();
        assert_eq!(key.day(), 366);
        assert_eq!(key.slot(), 10);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "3", "3:", ":2", "3:2:1", "a:2", "3:b", "0:2", "3:0", "-1:2"] {
            assert!(bad.parse::<SlotKey>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn ordering_is_reading_order() {
        let mut keys = vec![
            SlotKey::new(2, 1),
            SlotKey::new(1, 3),
            SlotKey::new(1, 1),
            SlotKey::new(10, 2),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(SlotKey::to_string).collect();
        assert_eq!(rendered, vec!["1:1", "1:3", "2:1", "10:2"]);
    }

    #[test]
    fn serde_as_string() {
        let key = SlotKey::new(7, 4);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"7:4\"");
        let back: SlotKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<SlotKey>("\"7-4\"").is_err());
    }
}
