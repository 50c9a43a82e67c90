//! Simulation outcome (solution) model.
//!
//! The outcome of one run pairs the timeline with per-process timing
//! results. It is built once by the simulator and read-only afterwards.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2
//! (Scheduling Criteria)

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};

/// Timing result for one process.
///
/// Carries the input columns (arrival, burst) alongside the derived ones
/// so that a results table can be rendered from this type alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Burst length (ticks).
    pub burst_time: i64,
    /// Tick at which the process first received the CPU.
    pub first_start: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `first_start - arrival_time`.
    pub response_time: i64,
}

impl ProcessResult {
    /// Derives the result of a process from its first start and completion.
    pub fn new(process: &Process, first_start: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            first_start,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_start - process.arrival_time,
        }
    }
}

/// Result of a complete simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Ordered CPU segments covering `[0, makespan]`.
    pub timeline: Timeline,
    /// Per-process results, in input order.
    pub results: Vec<ProcessResult>,
}

impl SimulationOutcome {
    /// Creates an outcome from a finished timeline and its results.
    pub fn new(timeline: Timeline, results: Vec<ProcessResult>) -> Self {
        Self { timeline, results }
    }

    /// Finds the result for a process id.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == process_id)
    }

    /// Tick at which the last process completed.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }

    /// Process ids ordered by completion time (ties in input order).
    pub fn completion_order(&self) -> Vec<&str> {
        let mut ordered: Vec<&ProcessResult> = self.results.iter().collect();
        ordered.sort_by_key(|r| r.completion_time);
        ordered.into_iter().map(|r| r.id.as_str()).collect()
    }
}
