//! Round-robin dispatching.
//!
//! Ready processes wait in a FIFO queue. Each turn runs the head of the
//! queue for at most one quantum; if it still has work it rejoins the back
//! of the queue behind every process that arrived while it was running.

use std::collections::VecDeque;

use super::{Dispatch, SchedulingContext, Strategy};

/// Preemptive round-robin strategy with a fixed time quantum.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: i64,
    queue: VecDeque<usize>,
}

impl RoundRobin {
    /// Creates a round-robin strategy. `quantum` must be at least 1;
    /// validation rejects anything smaller before a run starts.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
        }
    }

    /// Configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Input positions currently waiting, front first.
    pub fn queued(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }
}

impl Strategy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn on_arrival(&mut self, process: usize) {
        self.queue.push_back(process);
    }

    fn on_preempt(&mut self, process: usize) {
        self.queue.push_back(process);
    }

    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<Dispatch> {
        let process = self.queue.pop_front()?;
        Some(Dispatch {
            process,
            run_length: self.quantum.min(context.remaining(process)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_quantum_caps_run_length() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 1)];
        let remaining = [5, 1];
        let ready = [0, 1];
        let ctx = SchedulingContext::new(0, &processes, &remaining, &ready);

        let mut rr = RoundRobin::new(2);
        rr.on_arrival(0);
        rr.on_arrival(1);

        assert_eq!(rr.select(&ctx), Some(Dispatch { process: 0, run_length: 2 }));
        assert_eq!(rr.select(&ctx), Some(Dispatch { process: 1, run_length: 1 }));
        assert_eq!(rr.select(&ctx), None);
    }

    #[test]
    fn test_preempted_process_goes_to_back() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 3),
        ];
        let remaining = [3, 3, 3];
        let ready = [0, 1, 2];
        let ctx = SchedulingContext::new(2, &processes, &remaining, &ready);

        let mut rr = RoundRobin::new(2);
        rr.on_arrival(0);
        let first = rr.select(&ctx).unwrap();
        // Arrivals during P1's slice are queued before P1 comes back
        rr.on_arrival(1);
        rr.on_arrival(2);
        rr.on_preempt(first.process);

        assert_eq!(rr.queued().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn test_quantum_accessor() {
        assert_eq!(RoundRobin::new(4).quantum(), 4);
        assert_eq!(RoundRobin::new(4).name(), "RR");
    }
}
