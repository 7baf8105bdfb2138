//! Bounded in-memory event feed.

use std::collections::VecDeque;

use tower_core::WallClock;

/// How many feed entries are retained before the oldest are dropped.
pub const EVENT_LOG_CAPACITY: usize = 300;

/// One human-readable feed entry ("Avery Chen boarded the elevator…").
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SimulationEvent {
    /// ISO-8601 simulated wall time.
    pub timestamp: String,
    /// Resident display name, under the key the feed consumers expect.
    #[serde(rename = "resident")]
    pub resident_name: String,
    pub description: String,
    pub location: String,
}

/// Ring of the most recent [`SimulationEvent`]s, oldest first.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: VecDeque<SimulationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog { entries: VecDeque::with_capacity(EVENT_LOG_CAPACITY) }
    }

    pub fn record(
        &mut self,
        clock: WallClock,
        resident_name: &str,
        description: impl Into<String>,
        location: impl Into<String>,
    ) {
        if self.entries.len() == EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(SimulationEvent {
            timestamp: clock.iso8601(),
            resident_name: resident_name.to_string(),
            description: description.into(),
            location: location.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimulationEvent> {
        self.entries.iter()
    }

    /// Oldest-first copy for snapshot embedding.
    pub fn to_vec(&self) -> Vec<SimulationEvent> {
        self.entries.iter().cloned().collect()
    }
}
