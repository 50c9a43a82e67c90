//! Scheduling context for strategy and rule evaluation.

use crate::models::Process;

/// Read-only view of the simulator state at a dispatch decision.
///
/// Processes are addressed by their input position, never by value, so
/// two descriptors with identical fields stay distinct.
///
/// All times are in ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy)]
pub struct SchedulingContext<'a> {
    /// Current simulation time.
    pub current_time: i64,
    processes: &'a [Process],
    remaining: &'a [i64],
    ready: &'a [usize],
}

impl<'a> SchedulingContext<'a> {
    /// Creates a context over the given run state.
    ///
    /// `remaining` is indexed like `processes`; `ready` lists the input
    /// positions of arrived, unfinished processes in input order.
    pub fn new(
        current_time: i64,
        processes: &'a [Process],
        remaining: &'a [i64],
        ready: &'a [usize],
    ) -> Self {
        Self {
            current_time,
            processes,
            remaining,
            ready,
        }
    }

    /// Input positions of ready processes, in input order.
    pub fn ready(&self) -> &'a [usize] {
        self.ready
    }

    /// Process descriptor at an input position.
    pub fn process(&self, index: usize) -> &'a Process {
        &self.processes[index]
    }

    /// Remaining CPU time of the process at an input position.
    pub fn remaining(&self, index: usize) -> i64 {
        self.remaining[index]
    }

    /// Whether the process at an input position is ready to run.
    pub fn is_ready(&self, index: usize) -> bool {
        self.ready.binary_search(&index).is_ok()
    }
}
