//! One-call simulation requests.
//!
//! A [`SimulationRequest`] bundles the processes, the policy name and its
//! parameters, and deserializes straight from JSON. [`SimulationRequest::simulate`]
//! validates, runs and summarizes in one step.

use serde::{Deserialize, Serialize};

use super::{MetricsSummary, Simulator};
use crate::dispatching::Policy;
use crate::error::SimulationError;
use crate::models::{Process, SimulationOutcome};
use crate::validation::register;

/// Input container for a simulation run.
///
/// # Example
///
/// ```
/// use u_cpusim::scheduler::SimulationRequest;
///
/// let request: SimulationRequest = serde_json::from_str(r#"{
///     "policy": "RR",
///     "quantum": 2,
///     "processes": [
///         {"id": "P1", "arrival_time": 0, "burst_time": 5},
///         {"id": "P2", "arrival_time": 1, "burst_time": 3}
///     ]
/// }"#).unwrap();
///
/// let report = request.simulate().unwrap();
/// assert_eq!(report.outcome.makespan(), 8);
/// assert!((report.summary.average_waiting - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order.
    pub processes: Vec<Process>,
    /// Policy name: `"FCFS"`, `"SJF"`, `"RR"` or `"PRIORITY"`.
    pub policy: String,
    /// Round-robin time quantum. Ignored by other policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

/// Everything a presentation layer needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Policy that produced the outcome.
    pub policy: Policy,
    /// Timeline and per-process results.
    pub outcome: SimulationOutcome,
    /// Aggregate metrics.
    pub summary: MetricsSummary,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>, policy: impl Into<String>) -> Self {
        Self {
            processes,
            policy: policy.into(),
            quantum: None,
        }
    }

    /// Sets the round-robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Resolves the policy name and parameters.
    pub fn resolve_policy(&self) -> Result<Policy, SimulationError> {
        Ok(Policy::from_name(&self.policy, self.quantum)?)
    }

    /// Validates the input, runs the simulation and computes metrics.
    ///
    /// Validation happens before any simulation state exists, so an error
    /// never comes with a partial outcome.
    pub fn simulate(&self) -> Result<SimulationReport, SimulationError> {
        let policy = self.resolve_policy()?;
        let processes = register(self.processes.clone(), &policy)?;
        let outcome = Simulator::new(policy).run(&processes)?;
        let summary = MetricsSummary::summarize(&outcome)?;

        Ok(SimulationReport {
            policy,
            outcome,
            summary,
        })
    }
}
