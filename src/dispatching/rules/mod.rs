//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FCFS
//! - **Time-based**: SJF
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchingRule, RuleScore, SchedulingContext};

/// First-Come, First-Served.
///
/// Prioritizes processes by arrival time. Also serves as the arrival
/// tie-breaker behind every other rule.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context.process(process).arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the least remaining CPU time. Under
/// non-preemptive dispatch this equals the full burst.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context.remaining(process)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority.
///
/// Prioritizes processes with lower `priority` numbers. Processes without
/// a priority sort last.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: usize, context: &SchedulingContext<'_>) -> RuleScore {
        context
            .process(process)
            .priority
            .map(RuleScore::from)
            .unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Priority (lower number first)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("early_long", 0, 9).with_priority(5),
            Process::new("late_short", 4, 2).with_priority(1),
            Process::new("no_priority", 1, 3),
        ]
    }

    #[test]
    fn test_fcfs() {
        let processes = sample_processes();
        let remaining = [9, 2, 3];
        let ready = [0, 1, 2];
        let ctx = SchedulingContext::new(4, &processes, &remaining, &ready);
        assert!(Fcfs.evaluate(0, &ctx) < Fcfs.evaluate(1, &ctx));
        assert!(Fcfs.evaluate(2, &ctx) < Fcfs.evaluate(1, &ctx));
    }

    #[test]
    fn test_sjf_uses_remaining() {
        let processes = sample_processes();
        // early_long has already run down to 1 tick
        let remaining = [1, 2, 3];
        let ready = [0, 1, 2];
        let ctx = SchedulingContext::new(8, &processes, &remaining, &ready);
        assert!(Sjf.evaluate(0, &ctx) < Sjf.evaluate(1, &ctx));
        assert!(Sjf.evaluate(1, &ctx) < Sjf.evaluate(2, &ctx));
    }

    #[test]
    fn test_priority() {
        let processes = sample_processes();
        let remaining = [9, 2, 3];
        let ready = [0, 1, 2];
        let ctx = SchedulingContext::new(4, &processes, &remaining, &ready);
        assert!(Priority.evaluate(1, &ctx) < Priority.evaluate(0, &ctx));
        assert_eq!(Priority.evaluate(2, &ctx), RuleScore::MAX);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
