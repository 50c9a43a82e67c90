//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Simulates a single CPU under classic scheduling policies and reports an
//! idle-aware execution timeline with per-process and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TimelineSegment`, `Timeline`,
//!   `ProcessResult`, `SimulationOutcome`
//! - **`validation`**: Input integrity checks (empty input, duplicate IDs,
//!   time ranges, policy requirements)
//! - **`dispatching`**: Policy selector and strategies (FCFS, SJF,
//!   Round-Robin, Priority)
//! - **`scheduler`**: Simulation loop, metrics, requests and policy comparison
//! - **`workload`**: Seeded random process sets
//! - **`error`**: Engine and reporting errors
//!
//! # Quick Start
//!
//! ```
//! use u_cpusim::dispatching::Policy;
//! use u_cpusim::models::Process;
//! use u_cpusim::scheduler::{MetricsSummary, Simulator};
//! use u_cpusim::validation::register;
//!
//! let policy = Policy::Sjf;
//! let set = register(
//!     vec![
//!         Process::new("P1", 0, 7),
//!         Process::new("P2", 2, 4),
//!         Process::new("P3", 4, 1),
//!         Process::new("P4", 5, 4),
//!     ],
//!     &policy,
//! ).unwrap();
//!
//! let outcome = Simulator::new(policy).run(&set).unwrap();
//! assert_eq!(outcome.completion_order(), vec!["P1", "P3", "P2", "P4"]);
//!
//! let summary = MetricsSummary::summarize(&outcome).unwrap();
//! assert!((summary.average_waiting - 4.0).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (dispatch decisions at `debug`, run summaries at
//! `info`, rejected input at `warn`, aborted runs at `error`). Install a
//! subscriber in the host application to see them.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
