//! Discrete-event CPU scheduling simulator.
//!
//! # Algorithm
//!
//! 1. Admit every process whose arrival time has been reached, in
//!    (arrival, input position) order.
//! 2. If nothing is ready, emit an idle segment up to the next arrival.
//! 3. Otherwise ask the strategy for a dispatch and run it for the
//!    requested number of ticks.
//! 4. Admit processes that arrived during the slice, then hand the
//!    dispatched process back to the strategy if it still has work.
//! 5. Repeat until every process has completed.
//!
//! Idle detection and timeline assembly live here so that every strategy
//! shares them.
//!
//! # Complexity
//! O(d * r) where d = dispatch decisions and r = ready-set size.

use tracing::{debug, error, info};

use crate::dispatching::{Dispatch, Policy, SchedulingContext, Strategy};
use crate::error::EngineError;
use crate::models::{Process, ProcessResult, SimulationOutcome, Timeline, TimelineSegment};
use crate::validation::ProcessSet;

/// Runs a scheduling policy over a validated process set.
///
/// # Example
///
/// ```
/// use u_cpusim::dispatching::Policy;
/// use u_cpusim::models::{Process, TimelineSegment};
/// use u_cpusim::scheduler::Simulator;
/// use u_cpusim::validation::register;
///
/// let set = register(vec![Process::new("P1", 2, 4)], &Policy::Fcfs).unwrap();
/// let outcome = Simulator::new(Policy::Fcfs).run(&set).unwrap();
///
/// assert_eq!(
///     outcome.timeline.segments(),
///     &[TimelineSegment::idle(0, 2), TimelineSegment::execution("P1", 2, 6)]
/// );
/// assert_eq!(outcome.result_for("P1").unwrap().waiting_time, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    policy: Policy,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Simulates the configured policy with a fresh strategy.
    pub fn run(&self, processes: &ProcessSet) -> Result<SimulationOutcome, EngineError> {
        if self.policy.requires_priority() && !processes.priorities_checked() {
            let err = EngineError::NotValidated {
                policy: self.policy.kind(),
            };
            error!(policy = %self.policy, "{err}");
            return Err(err);
        }
        if let Policy::RoundRobin { quantum } = self.policy {
            if quantum < 1 {
                let err = EngineError::InvalidQuantum { quantum };
                error!(policy = %self.policy, "{err}");
                return Err(err);
            }
        }

        let mut strategy = self.policy.strategy();
        Self::run_with(strategy.as_mut(), processes)
    }

    /// Simulates an arbitrary strategy.
    ///
    /// The strategy should be fresh: queue-based strategies carry state
    /// between calls.
    pub fn run_with(
        strategy: &mut dyn Strategy,
        processes: &ProcessSet,
    ) -> Result<SimulationOutcome, EngineError> {
        let strategy_name = strategy.name();
        let outcome = RunState::new(processes.processes())
            .execute(strategy)
            .inspect_err(|err| error!(strategy = strategy_name, "simulation aborted: {err}"))?;

        info!(
            strategy = strategy_name,
            processes = outcome.process_count(),
            makespan = outcome.makespan(),
            idle = outcome.timeline.idle_time(),
            "simulation complete"
        );
        Ok(outcome)
    }
}

/// Mutable state of a single run. Dropped once the outcome is built.
struct RunState<'a> {
    processes: &'a [Process],
    /// Input positions sorted by (arrival, input position).
    arrival_order: Vec<usize>,
    /// Next entry of `arrival_order` not yet admitted.
    next_arrival: usize,
    remaining: Vec<i64>,
    /// Arrived, unfinished processes in input order.
    ready: Vec<usize>,
    first_start: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
    completed: usize,
    now: i64,
    timeline: Timeline,
}

impl<'a> RunState<'a> {
    fn new(processes: &'a [Process]) -> Self {
        let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
        arrival_order.sort_by_key(|&i| (processes[i].arrival_time, i));

        Self {
            processes,
            arrival_order,
            next_arrival: 0,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            ready: Vec::with_capacity(processes.len()),
            first_start: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            completed: 0,
            now: 0,
            timeline: Timeline::new(),
        }
    }

    fn execute(mut self, strategy: &mut dyn Strategy) -> Result<SimulationOutcome, EngineError> {
        self.admit_arrivals(strategy);

        while self.completed < self.processes.len() {
            if self.ready.is_empty() {
                self.idle_until_next_arrival()?;
                self.admit_arrivals(strategy);
                continue;
            }

            let context =
                SchedulingContext::new(self.now, self.processes, &self.remaining, &self.ready);
            let dispatch = strategy.select(&context).ok_or(EngineError::NoSelection {
                strategy: strategy.name(),
                time: self.now,
            })?;
            self.check_dispatch(strategy.name(), dispatch)?;

            let process = dispatch.process;
            self.run_slice(dispatch);
            self.admit_arrivals(strategy);

            if self.remaining[process] == 0 {
                self.complete(process);
            } else {
                strategy.on_preempt(process);
            }
        }

        self.into_outcome()
    }

    /// Hands every process with `arrival_time <= now` to the strategy.
    fn admit_arrivals(&mut self, strategy: &mut dyn Strategy) {
        while let Some(&index) = self.arrival_order.get(self.next_arrival) {
            if !self.processes[index].has_arrived(self.now) {
                break;
            }
            if let Err(pos) = self.ready.binary_search(&index) {
                self.ready.insert(pos, index);
            }
            strategy.on_arrival(index);
            self.next_arrival += 1;
        }
    }

    fn idle_until_next_arrival(&mut self) -> Result<(), EngineError> {
        let next = self
            .arrival_order
            .get(self.next_arrival)
            .map(|&i| self.processes[i].arrival_time)
            .ok_or(EngineError::Stalled { time: self.now })?;

        debug!(start = self.now, end = next, "cpu idle");
        self.timeline.push(TimelineSegment::idle(self.now, next));
        self.now = next;
        Ok(())
    }

    fn check_dispatch(
        &self,
        strategy: &'static str,
        dispatch: Dispatch,
    ) -> Result<(), EngineError> {
        if self.ready.binary_search(&dispatch.process).is_err() {
            return Err(EngineError::NotReady {
                strategy,
                process: dispatch.process,
                time: self.now,
            });
        }

        let remaining = self.remaining[dispatch.process];
        if dispatch.run_length < 1 || dispatch.run_length > remaining {
            return Err(EngineError::InvalidRunLength {
                strategy,
                process_id: self.processes[dispatch.process].id.clone(),
                requested: dispatch.run_length,
                remaining,
            });
        }
        Ok(())
    }

    fn run_slice(&mut self, dispatch: Dispatch) {
        let process = &self.processes[dispatch.process];
        let start = self.now;
        let end = start + dispatch.run_length;

        debug!(process = %process.id, start, end, "dispatch");
        self.first_start[dispatch.process].get_or_insert(start);
        self.timeline
            .push(TimelineSegment::execution(process.id.as_str(), start, end));
        self.remaining[dispatch.process] -= dispatch.run_length;
        self.now = end;
    }

    fn complete(&mut self, process: usize) {
        self.completion[process] = Some(self.now);
        if let Ok(pos) = self.ready.binary_search(&process) {
            self.ready.remove(pos);
        }
        self.completed += 1;
    }

    fn into_outcome(self) -> Result<SimulationOutcome, EngineError> {
        let mut results = Vec::with_capacity(self.processes.len());
        for (i, process) in self.processes.iter().enumerate() {
            match (self.first_start[i], self.completion[i]) {
                (Some(first_start), Some(completion)) => {
                    results.push(ProcessResult::new(process, first_start, completion));
                }
                _ => return Err(EngineError::Stalled { time: self.now }),
            }
        }
        Ok(SimulationOutcome::new(self.timeline, results))
    }
}
