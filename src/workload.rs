//! Random workload generation.
//!
//! Produces process sets for demonstrations and randomized testing.
//! With a seeded RNG the output is reproducible.

use rand::Rng;

use crate::models::Process;

/// Generator of random process sets.
///
/// Every generated process has a unique id (`P1..Pn`), a burst of at
/// least one tick and a priority, so the output registers under any policy.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_cpusim::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(5).with_max_burst(4);
/// let mut rng = StdRng::seed_from_u64(42);
/// let processes = generator.generate(&mut rng);
///
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes per set.
    pub count: usize,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: i64,
    /// Longest possible burst (inclusive, at least 1).
    pub max_burst: i64,
    /// Largest priority number (inclusive).
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges
    /// (arrival 0..=10, burst 1..=10, priority 0..=5).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority number.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Generates one process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
                .with_priority(rng.random_range(0..=self.max_priority))
            })
            .collect()
    }
}
