//! High-level activities residents perform throughout the day.

/// What a resident is doing during a schedule event.
///
/// The tag drives mood adjustment and the snapshot's activity breakdown;
/// the engine attaches no further meaning to it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Activity {
    Sleep,
    Work,
    Commute,
    Amenity,
    Eat,
    Errand,
    Leisure,
    AtHome,
    Away,
}

impl Activity {
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Sleep => "sleep",
            Activity::Work => "work",
            Activity::Commute => "commute",
            Activity::Amenity => "amenity",
            Activity::Eat => "eat",
            Activity::Errand => "errand",
            Activity::Leisure => "leisure",
            Activity::AtHome => "at_home",
            Activity::Away => "away",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
