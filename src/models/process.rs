//! Process model.
//!
//! A process is the unit of work handed to the CPU scheduler. It becomes
//! eligible at its arrival time and needs `burst_time` ticks of CPU to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// Immutable once created: the simulator keeps remaining work in its own
/// run-local state and never touches the input descriptors.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// Signed integers are used so that malformed input (negative arrival)
/// can be represented and rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required (ticks).
    pub burst_time: i64,
    /// Scheduling priority (lower = more important). Required only for
    /// priority scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Earliest tick at which this process could possibly complete.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
