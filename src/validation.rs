//! Input validation for CPU scheduling runs (process registry).
//!
//! Checks the process descriptors before any simulation state exists.
//! Detects:
//! - Empty input
//! - Empty or duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities (priority scheduling only)
//! - Non-positive time quantum (round-robin only)
//! - Workloads whose horizon exceeds the tick range
//!
//! All detected problems are reported together, so a caller can show
//! every mistake at once instead of one per attempt.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::dispatching::Policy;
use crate::models::Process;

/// Validation result.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process has an empty identifier.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (burst < 1).
    InvalidBurst,
    /// Priority scheduling requested but a process has no priority.
    MissingPriority,
    /// Round-robin time quantum is missing or < 1.
    InvalidQuantum,
    /// The policy name is not recognized.
    UnknownPolicy,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A process set that passed [`register`].
///
/// Can only be constructed through validation, so the simulator never
/// sees malformed input. Remembers whether priorities were checked, since
/// a set registered for FCFS may legitimately lack them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSet {
    processes: Vec<Process>,
    priorities_checked: bool,
}

impl ProcessSet {
    /// Processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Process at an input position.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Number of processes (always at least one).
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always `false`: registration rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether every process was verified to carry a priority.
    pub fn priorities_checked(&self) -> bool {
        self.priorities_checked
    }

    /// Releases the processes.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}

/// Validates processes for the given policy and wraps them in a [`ProcessSet`].
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-empty and unique
/// 3. `arrival_time >= 0`
/// 4. `burst_time >= 1`
/// 5. Every process has a priority (priority scheduling)
/// 6. `quantum >= 1` (round-robin)
/// 7. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// # Returns
/// The validated set, or `Err(errors)` with all detected issues.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::Policy;
/// use u_cpusim::models::Process;
/// use u_cpusim::validation::register;
///
/// let set = register(vec![Process::new("P1", 0, 5)], &Policy::Fcfs).unwrap();
/// assert_eq!(set.len(), 1);
///
/// let errors = register(vec![], &Policy::Fcfs).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn register(processes: Vec<Process>, policy: &Policy) -> ValidationResult<ProcessSet> {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for (position, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {position} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!(
                    "Process '{}' has burst time {}, expected at least 1",
                    p.id, p.burst_time
                ),
            ));
        }

        if policy.requires_priority() && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    if let Policy::RoundRobin { quantum } = policy {
        if *quantum < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be at least 1, got {quantum}"),
            ));
        }
    }

    if simulation_horizon(&processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the tick range",
        ));
    }

    if !errors.is_empty() {
        warn!(
            policy = %policy,
            error_count = errors.len(),
            "rejected process set"
        );
        return Err(errors);
    }

    let priorities_checked = processes.iter().all(|p| p.priority.is_some());
    Ok(ProcessSet {
        processes,
        priorities_checked,
    })
}

/// Upper bound on every time a run over `processes` can reach.
///
/// The engine never idles while work is ready, so the last completion is at
/// most the latest arrival plus the total burst. `None` on overflow.
fn simulation_horizon(processes: &[Process]) -> Option<i64> {
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time.max(0)))?;
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    latest_arrival.checked_add(total_burst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        let set = register(sample_processes(), &Policy::Fcfs).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.get(1).unwrap().id, "P2");
        assert!(!set.priorities_checked());
    }

    #[test]
    fn test_empty_input() {
        let errors = register(Vec::new(), &Policy::Sjf).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyInput]);
    }

    #[test]
    fn test_empty_id() {
        let errors = register(vec![Process::new("", 0, 1)], &Policy::Fcfs).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyId]);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 3, 2)];
        let errors = register(processes, &Policy::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = register(vec![Process::new("P1", -1, 5)], &Policy::Fcfs).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NegativeArrival]);
    }

    #[test]
    fn test_invalid_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -4)];
        let errors = register(processes, &Policy::Fcfs).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::InvalidBurst, ValidationErrorKind::InvalidBurst]
        );
    }

    #[test]
    fn test_missing_priority() {
        let processes = vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3),
        ];
        let errors = register(processes.clone(), &Policy::Priority).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::MissingPriority]);

        // Other policies ignore priorities entirely
        assert!(register(processes, &Policy::Sjf).is_ok());
    }

    #[test]
    fn test_priorities_checked() {
        let processes = vec![Process::new("P1", 0, 5).with_priority(1)];
        let set = register(processes, &Policy::Priority).unwrap();
        assert!(set.priorities_checked());
    }

    #[test]
    fn test_invalid_quantum() {
        let errors =
            register(sample_processes(), &Policy::RoundRobin { quantum: 0 }).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidQuantum]);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("P1", -2, 0),
            Process::new("P1", 0, 1),
            Process::new("", 0, 1),
        ];
        let errors = register(processes, &Policy::Priority).unwrap_err();
        // P1: negative arrival + bad burst + no priority; dup P1: dup + no priority;
        // empty id: empty + no priority
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_time_overflow() {
        let errors =
            register(vec![Process::new("P1", i64::MAX - 1, 5)], &Policy::Fcfs).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::TimeOverflow]);

        let processes = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 1)];
        let errors = register(processes, &Policy::Sjf).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::TimeOverflow]);
    }

    #[test]
    #[allow(arithmetic_overflow)]
    fn test_horizon_at_tick_limit() {
        let processes = vec![
            Process::new("P1", 0, i64::MAX / 2),
            Process::new("P2", 3, i64::MAX / 2),
        ];
        assert_eq!(
            simulation_horizon(&processes),
            Some(3 + 2 * (i64::MAX / 2))
        );
        assert!(register(processes, &Policy::Fcfs).is_ok());
    }

    #[test]
    fn test_into_processes_keeps_input_order() {
        let set = register(sample_processes(), &Policy::Fcfs).unwrap();
        let ids: Vec<String> = set.into_processes().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1");
        assert_eq!(err.to_string(), "DuplicateId: Duplicate process ID: P1");
    }
}
