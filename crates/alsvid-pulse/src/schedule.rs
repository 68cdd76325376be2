//! Timed pulse programs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::instruction::Instruction;

/// One instruction placed at an absolute start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Start time in device time units.
    pub start: f64,
    /// The instruction.
    pub instruction: Instruction,
}

impl ScheduleEntry {
    /// End time of this entry.
    pub fn stop(&self) -> f64 {
        self.start + self.instruction.duration()
    }
}

/// An ordered pulse program.
///
/// Entries are kept in insertion order; per-channel instruction order is the
/// order the scheduling layer inserted them in, which transformations must
/// preserve. Transformations ([`Schedule::shifted`], [`Schedule::appended`])
/// return new schedules and never mutate their input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    name: String,
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Create an empty schedule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: vec![],
        }
    }

    /// Insert an instruction at an absolute start time.
    pub fn insert(&mut self, start: f64, instruction: Instruction) -> &mut Self {
        self.entries.push(ScheduleEntry { start, instruction });
        self
    }

    /// Name of the schedule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the schedule holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest instruction end time across all channels (0 when empty).
    pub fn stop_time(&self) -> f64 {
        self.entries.iter().map(ScheduleEntry::stop).fold(0.0, f64::max)
    }

    /// Total duration; alias for [`Schedule::stop_time`] on schedules that
    /// start at 0.
    pub fn duration(&self) -> f64 {
        self.stop_time()
    }

    /// The set of channels this schedule touches.
    pub fn channels(&self) -> BTreeSet<Channel> {
        self.entries
            .iter()
            .map(|entry| entry.instruction.channel)
            .collect()
    }

    /// Entries on one channel, in program order.
    pub fn channel_entries<'a>(
        &'a self,
        channel: Channel,
    ) -> impl Iterator<Item = &'a ScheduleEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.instruction.channel == channel)
    }

    /// A copy with every entry shifted later by `offset`.
    #[must_use]
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            name: self.name.clone(),
            entries: self
                .entries
                .iter()
                .map(|entry| ScheduleEntry {
                    start: entry.start + offset,
                    instruction: entry.instruction.clone(),
                })
                .collect(),
        }
    }

    /// A copy with `other`'s entries appended after this schedule's own,
    /// both sides keeping their order and absolute times.
    #[must_use]
    pub fn appended(&self, other: &Schedule) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().cloned());
        Self {
            name: self.name.clone(),
            entries,
        }
    }
}
