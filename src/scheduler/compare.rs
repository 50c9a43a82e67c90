//! Side-by-side policy comparison.
//!
//! Each policy runs on its own scoped thread with its own strategy and
//! run state. The process set is shared read-only, so no locking is needed.

use std::thread;

use tracing::debug;

use super::{MetricsSummary, Simulator};
use crate::dispatching::Policy;
use crate::error::EngineError;
use crate::models::SimulationOutcome;
use crate::validation::ProcessSet;

/// Result of one policy in a comparison.
#[derive(Debug, Clone)]
pub struct PolicyRun {
    /// Policy that was simulated.
    pub policy: Policy,
    /// Outcome, or the engine error that aborted the run.
    pub result: Result<SimulationOutcome, EngineError>,
}

impl PolicyRun {
    /// Metrics of a successful run.
    pub fn summary(&self) -> Option<MetricsSummary> {
        self.result
            .as_ref()
            .ok()
            .and_then(|outcome| MetricsSummary::summarize(outcome).ok())
    }
}

/// Simulates every policy over the same process set in parallel.
///
/// Results are returned in the order of `policies`.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::Policy;
/// use u_cpusim::models::Process;
/// use u_cpusim::scheduler::compare_policies;
/// use u_cpusim::validation::register;
///
/// let set = register(
///     vec![Process::new("P1", 0, 7), Process::new("P2", 1, 1)],
///     &Policy::Fcfs,
/// ).unwrap();
/// let runs = compare_policies(&set, &[Policy::Fcfs, Policy::RoundRobin { quantum: 1 }]);
///
/// assert_eq!(runs.len(), 2);
/// let fcfs = runs[0].summary().unwrap();
/// let rr = runs[1].summary().unwrap();
/// assert!(rr.average_waiting < fcfs.average_waiting);
/// ```
pub fn compare_policies(processes: &ProcessSet, policies: &[Policy]) -> Vec<PolicyRun> {
    debug!(policies = policies.len(), "comparing policies");

    thread::scope(|scope| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&policy| {
                let simulator = Simulator::new(policy);
                (simulator.policy(), scope.spawn(move || simulator.run(processes)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(policy, handle)| PolicyRun {
                policy,
                result: handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload)),
            })
            .collect()
    })
}
