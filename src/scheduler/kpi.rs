//! Simulation quality metrics (metrics reporter).
//!
//! Computes standard CPU scheduling criteria from a finished outcome.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Turnaround | Mean of completion - arrival |
//! | Average Waiting | Mean of turnaround - burst |
//! | Average Response | Mean of first start - arrival |
//! | Makespan | Latest completion time |
//! | Idle Time | Ticks with no process ready |
//! | CPU Utilization | Busy ticks / makespan |
//! | Throughput | Processes completed per tick |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::EmptyResultError;
use crate::models::SimulationOutcome;

/// Aggregate performance indicators of one simulation run.
///
/// Averages are arithmetic means over all processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Mean turnaround time (ticks).
    pub average_turnaround: f64,
    /// Mean waiting time (ticks).
    pub average_waiting: f64,
    /// Mean response time (ticks).
    pub average_response: f64,
    /// Latest completion time (ticks).
    pub makespan: i64,
    /// Total idle ticks within `[0, makespan]`.
    pub idle_time: i64,
    /// Fraction of `[0, makespan]` spent executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl MetricsSummary {
    /// Computes metrics from a simulation outcome.
    ///
    /// # Errors
    /// [`EmptyResultError`] if the outcome contains no processes.
    ///
    /// # Example
    /// ```
    /// use u_cpusim::dispatching::Policy;
    /// use u_cpusim::models::Process;
    /// use u_cpusim::scheduler::{MetricsSummary, Simulator};
    /// use u_cpusim::validation::register;
    ///
    /// let set = register(
    ///     vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3), Process::new("P3", 2, 8)],
    ///     &Policy::Fcfs,
    /// ).unwrap();
    /// let outcome = Simulator::new(Policy::Fcfs).run(&set).unwrap();
    /// let summary = MetricsSummary::summarize(&outcome).unwrap();
    ///
    /// assert!((summary.average_turnaround - 26.0 / 3.0).abs() < 1e-10);
    /// assert!((summary.average_waiting - 10.0 / 3.0).abs() < 1e-10);
    /// ```
    pub fn summarize(outcome: &SimulationOutcome) -> Result<Self, EmptyResultError> {
        let count = outcome.results.len();
        if count == 0 {
            return Err(EmptyResultError);
        }

        // Each term fits in i64, but a sum over many processes may not
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut total_response: i128 = 0;
        for r in &outcome.results {
            total_turnaround += i128::from(r.turnaround_time);
            total_waiting += i128::from(r.waiting_time);
            total_response += i128::from(r.response_time);
        }

        let n = count as f64;
        let makespan = outcome.makespan();
        let idle_time = outcome.timeline.idle_time();

        // A non-empty outcome always has makespan >= 1 (burst >= 1)
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                outcome.timeline.busy_time() as f64 / makespan as f64,
                n / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            average_turnaround: total_turnaround as f64 / n,
            average_waiting: total_waiting as f64 / n,
            average_response: total_response as f64 / n,
            makespan,
            idle_time,
            cpu_utilization,
            throughput,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::Policy;
    use crate::models::{Process, Timeline};
    use crate::scheduler::Simulator;
    use crate::validation::register;

    fn summarize(policy: Policy, processes: Vec<Process>) -> MetricsSummary {
        let set = register(processes, &policy).unwrap();
        let outcome = Simulator::new(policy).run(&set).unwrap();
        MetricsSummary::summarize(&outcome).unwrap()
    }

    #[test]
    fn test_fcfs_averages() {
        let m = summarize(
            Policy::Fcfs,
            vec![
                Process::new("P1", 0, 5),
                Process::new("P2", 1, 3),
                Process::new("P3", 2, 8),
            ],
        );
        // Turnaround 5, 7, 14; waiting 0, 4, 6
        assert!((m.average_turnaround - 26.0 / 3.0).abs() < 1e-10);
        assert!((m.average_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.average_response - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.makespan, 16);
        assert_eq!(m.idle_time, 0);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_idle_lowers_utilization() {
        let m = summarize(Policy::Fcfs, vec![Process::new("P1", 2, 4)]);
        assert!((m.average_turnaround - 4.0).abs() < 1e-10);
        assert!((m.average_waiting - 0.0).abs() < 1e-10);
        assert_eq!(m.idle_time, 2);
        assert!((m.cpu_utilization - 4.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_averages() {
        let m = summarize(
            Policy::Sjf,
            vec![
                Process::new("P1", 0, 7),
                Process::new("P2", 2, 4),
                Process::new("P3", 4, 1),
                Process::new("P4", 5, 4),
            ],
        );
        // Turnaround 7, 10, 4, 11; waiting 0, 6, 3, 7
        assert!((m.average_turnaround - 8.0).abs() < 1e-10);
        assert!((m.average_waiting - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_robin_averages() {
        let m = summarize(
            Policy::RoundRobin { quantum: 2 },
            vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)],
        );
        // Turnaround 8, 6; waiting 3, 3; response 0, 1
        assert!((m.average_turnaround - 7.0).abs() < 1e-10);
        assert!((m.average_waiting - 3.0).abs() < 1e-10);
        assert!((m.average_response - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_long_bursts_do_not_overflow_totals() {
        let half = i64::MAX / 2;
        let m = summarize(
            Policy::Fcfs,
            vec![Process::new("P1", 0, half), Process::new("P2", 0, half)],
        );
        // Turnaround half, 2 * half; their sum exceeds i64::MAX
        let h = half as f64;
        assert!(m.average_turnaround.is_finite());
        assert!((m.average_turnaround / (1.5 * h) - 1.0).abs() < 1e-9);
        assert!((m.average_waiting / (0.5 * h) - 1.0).abs() < 1e-9);
        assert_eq!(m.makespan, 2 * half);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_outcome() {
        let outcome = SimulationOutcome::new(Timeline::new(), Vec::new());
        assert_eq!(MetricsSummary::summarize(&outcome), Err(EmptyResultError));
    }
}
