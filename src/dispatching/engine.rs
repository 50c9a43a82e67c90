//! Rule engine for non-preemptive dispatching.
//!
//! Composes dispatching rules into a lexicographic key: the primary rule
//! decides, later rules only break ties, and input order settles whatever
//! is still tied. The selected process always runs to completion.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{Dispatch, DispatchingRule, RuleScore, SchedulingContext, Strategy};

/// A composable, non-preemptive rule engine.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::{rules, RuleEngine, SchedulingContext, Strategy};
/// use u_cpusim::models::Process;
///
/// let mut engine = RuleEngine::new()
///     .with_rule(rules::Sjf)
///     .with_tie_breaker(rules::Fcfs);
///
/// let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 2)];
/// let remaining = [4, 2];
/// let ready = [0, 1];
/// let ctx = SchedulingContext::new(1, &processes, &remaining, &ready);
///
/// let dispatch = engine.select(&ctx).unwrap();
/// assert_eq!(dispatch.process, 1);
/// assert_eq!(dispatch.run_length, 2);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    name: &'static str,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            name: "INPUT-ORDER",
        }
    }

    /// Adds a primary rule. The first rule added names the engine.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        if self.rules.is_empty() {
            self.name = rule.name();
        }
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sorts the ready processes by priority (highest priority first).
    ///
    /// Returns input positions. Shows the full dispatch order the engine
    /// would follow if nothing else arrived.
    ///
    /// # Example
    /// ```
    /// use u_cpusim::dispatching::{rules, RuleEngine, SchedulingContext};
    /// use u_cpusim::models::Process;
    ///
    /// let engine = RuleEngine::new()
    ///     .with_rule(rules::Priority)
    ///     .with_tie_breaker(rules::Fcfs);
    ///
    /// let processes = vec![
    ///     Process::new("P1", 0, 3).with_priority(2),
    ///     Process::new("P2", 1, 5).with_priority(1),
    ///     Process::new("P3", 0, 2).with_priority(2),
    /// ];
    /// let remaining = [3, 5, 2];
    /// let ready = [0, 1, 2];
    /// let ctx = SchedulingContext::new(1, &processes, &remaining, &ready);
    ///
    /// // P2 has the best priority; P1 and P3 tie and fall back to input order
    /// assert_eq!(engine.sort_ready(&ctx), vec![1, 0, 2]);
    /// ```
    pub fn sort_ready(&self, context: &SchedulingContext<'_>) -> Vec<usize> {
        let mut indices = context.ready().to_vec();
        indices.sort_by(|&a, &b| self.compare_sequential(a, b, context));
        indices
    }

    /// Returns the input position of the highest-priority ready process.
    pub fn select_best(&self, context: &SchedulingContext<'_>) -> Option<usize> {
        context
            .ready()
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare_sequential(a, b, context))
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: usize, context: &SchedulingContext<'_>) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare_sequential(&self, a: usize, b: usize, context: &SchedulingContext<'_>) -> Ordering {
        for rule in &self.rules {
            let ordering = rule
                .evaluate(a, context)
                .cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        // All rules tied → earlier input position wins
        a.cmp(&b)
    }
}

impl Strategy for RuleEngine {
    fn name(&self) -> &'static str {
        self.name
    }

    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<Dispatch> {
        self.select_best(context).map(|process| Dispatch {
            process,
            run_length: context.remaining(process),
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("name", &self.name)
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
