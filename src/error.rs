//! Error types for simulation runs.
//!
//! | Error | Meaning | Caller reaction |
//! |-------|---------|-----------------|
//! | [`ValidationError`] | Bad input | Fix input and retry |
//! | [`EngineError`] | Broken internal invariant | Abort the run |
//! | [`EmptyResultError`] | Outcome without processes | Treat as bad input |

use std::fmt;

use crate::dispatching::PolicyKind;
use crate::validation::ValidationError;

/// Fatal invariant violation inside the simulator.
///
/// Never produced for input that went through
/// [`register`](crate::validation::register) with the same policy and a
/// built-in strategy. No partial outcome is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The process set was not validated for this policy's requirements.
    NotValidated {
        /// Policy that was about to run.
        policy: PolicyKind,
    },
    /// Round-robin quantum below 1.
    InvalidQuantum {
        /// Offending quantum.
        quantum: i64,
    },
    /// The strategy selected nothing although processes were ready.
    NoSelection {
        /// Strategy name.
        strategy: &'static str,
        /// Simulation time of the decision.
        time: i64,
    },
    /// The strategy selected a process that is not ready.
    NotReady {
        /// Strategy name.
        strategy: &'static str,
        /// Input position that was selected.
        process: usize,
        /// Simulation time of the decision.
        time: i64,
    },
    /// The strategy requested a run length outside `1..=remaining`.
    InvalidRunLength {
        /// Strategy name.
        strategy: &'static str,
        /// Selected process id.
        process_id: String,
        /// Requested run length.
        requested: i64,
        /// Remaining burst of the process.
        remaining: i64,
    },
    /// Nothing is ready and no arrival is pending, yet work remains.
    Stalled {
        /// Simulation time at which progress stopped.
        time: i64,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotValidated { policy } => {
                write!(f, "process set was not validated for policy {policy}")
            }
            Self::InvalidQuantum { quantum } => {
                write!(f, "round-robin quantum must be at least 1, got {quantum}")
            }
            Self::NoSelection { strategy, time } => {
                write!(f, "{strategy} selected no process at t={time} with a non-empty ready set")
            }
            Self::NotReady {
                strategy,
                process,
                time,
            } => write!(
                f,
                "{strategy} selected process #{process} at t={time}, which is not ready"
            ),
            Self::InvalidRunLength {
                strategy,
                process_id,
                requested,
                remaining,
            } => write!(
                f,
                "{strategy} requested {requested} ticks for '{process_id}' with {remaining} remaining"
            ),
            Self::Stalled { time } => write!(f, "simulation stalled at t={time}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Metrics were requested for an outcome with zero processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResultError;

impl fmt::Display for EmptyResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("simulation outcome contains no processes")
    }
}

impl std::error::Error for EmptyResultError {}

/// Any failure of the one-call simulation path.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Input was rejected; every detected problem is listed.
    Validation(Vec<ValidationError>),
    /// The simulator hit an invariant violation.
    Engine(EngineError),
    /// The outcome had no processes to summarize.
    EmptyResult(EmptyResultError),
}

impl SimulationError {
    /// Whether the caller can recover by correcting the input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Engine(_))
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "invalid input ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::EmptyResult(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Engine(e) => Some(e),
            Self::EmptyResult(e) => Some(e),
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<ValidationError> for SimulationError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }
}

impl From<EngineError> for SimulationError {
    fn from(error: EngineError) -> Self {
        Self::Engine(error)
    }
}

impl From<EmptyResultError> for SimulationError {
    fn from(error: EmptyResultError) -> Self {
        Self::EmptyResult(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_engine_error_display() {
        let e = EngineError::InvalidRunLength {
            strategy: "RR",
            process_id: "P1".into(),
            requested: 5,
            remaining: 2,
        };
        assert_eq!(e.to_string(), "RR requested 5 ticks for 'P1' with 2 remaining");

        let e = EngineError::NotValidated {
            policy: PolicyKind::Priority,
        };
        assert_eq!(
            e.to_string(),
            "process set was not validated for policy PRIORITY"
        );
    }

    #[test]
    fn test_simulation_error_conversions() {
        let v = ValidationError {
            kind: ValidationErrorKind::EmptyInput,
            message: "At least one process is required".into(),
        };
        let err: SimulationError = v.into();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("At least one process"));

        let err: SimulationError = EngineError::Stalled { time: 3 }.into();
        assert!(!err.is_recoverable());
        assert!(std::error::Error::source(&err).is_some());

        let err: SimulationError = EmptyResultError.into();
        assert!(err.is_recoverable());
    }
}
