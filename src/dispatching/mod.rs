//! Dispatching strategies and the policy selector.
//!
//! A [`Strategy`] decides which ready process gets the CPU next and for how
//! long. Non-preemptive policies (FCFS, SJF, Priority) are expressed as a
//! [`RuleEngine`] over [`DispatchingRule`]s; round-robin keeps its own queue.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{rules, Policy, RuleEngine, Strategy};
//!
//! let sjf = RuleEngine::new()
//!     .with_rule(rules::Sjf)
//!     .with_tie_breaker(rules::Fcfs);
//! assert_eq!(sjf.name(), "SJF");
//!
//! let strategy = Policy::from_name("PRIORITY", None).unwrap().strategy();
//! assert_eq!(strategy.name(), "PRIORITY");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
mod policy;
mod round_robin;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;
pub use policy::{Policy, PolicyKind};
pub use round_robin::RoundRobin;

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores the process at input position `process`.
    fn evaluate(&self, process: usize, context: &SchedulingContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// A dispatch decision: run `process` for `run_length` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Input position of the selected process.
    pub process: usize,
    /// Ticks to run before the next decision.
    pub run_length: i64,
}

/// Process selection capability driven by the simulator.
///
/// The simulator owns the clock, idle detection and timeline assembly; a
/// strategy only sees arrivals, preemptions and selection requests.
/// Hooks fire in this order around each slice: `select`, then `on_arrival`
/// for every process that arrived up to the end of the slice, then
/// `on_preempt` if the selected process still has work left.
pub trait Strategy: Debug {
    /// Strategy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Called once per process when it becomes ready, in arrival order
    /// (input order among equal arrivals).
    fn on_arrival(&mut self, _process: usize) {}

    /// Called when a dispatched process used its run length without
    /// finishing.
    fn on_preempt(&mut self, _process: usize) {}

    /// Chooses the next process among `context.ready()`.
    ///
    /// Must return a ready process and `1 <= run_length <= remaining`.
    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<Dispatch>;
}
