//! Simulation engine and metrics.
//!
//! Runs a scheduling policy over a validated process set and evaluates the
//! result.
//!
//! # Algorithm
//!
//! `Simulator` is a discrete-event loop: it advances the clock from one
//! dispatch decision to the next, inserting idle segments whenever no
//! process has arrived yet. Process selection is delegated to a
//! [`Strategy`](crate::dispatching::Strategy).
//!
//! # Metrics
//!
//! `MetricsSummary` computes average turnaround, waiting and response
//! times, plus makespan, idle time, utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod compare;
mod kpi;
mod request;
mod simulator;

pub use compare::{compare_policies, PolicyRun};
pub use kpi::MetricsSummary;
pub use request::{SimulationReport, SimulationRequest};
pub use simulator::Simulator;
