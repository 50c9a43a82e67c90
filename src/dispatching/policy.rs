//! Policy selector.
//!
//! Maps a policy name (`"FCFS" | "SJF" | "RR" | "PRIORITY"`) and its
//! parameters to a ready-to-run [`Strategy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RoundRobin, RuleEngine, Strategy};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Policy family, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Round-robin with a time quantum.
    RoundRobin,
    /// Static priority (non-preemptive).
    Priority,
}

impl PolicyKind {
    /// Canonical short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
            Self::Priority => "PRIORITY",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    /// Parses a policy name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            "RR" | "ROUND-ROBIN" | "ROUND_ROBIN" => Ok(Self::RoundRobin),
            "PRIORITY" | "PRIORITY_SCHEDULING" => Ok(Self::Priority),
            other => Err(ValidationError::new(
                ValidationErrorKind::UnknownPolicy,
                format!("Unknown scheduling policy '{other}'"),
            )),
        }
    }
}

/// A fully parameterized scheduling policy.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::Policy;
///
/// let rr = Policy::from_name("rr", Some(2)).unwrap();
/// assert_eq!(rr, Policy::RoundRobin { quantum: 2 });
/// assert!(Policy::from_name("RR", None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Round-robin with the given time quantum (ticks).
    RoundRobin {
        /// Maximum ticks per turn.
        quantum: i64,
    },
    /// Static priority (non-preemptive, lower number first).
    Priority,
}

impl Policy {
    /// Builds a policy from its family and optional quantum.
    ///
    /// Round-robin requires a quantum; other families ignore it.
    pub fn from_kind(kind: PolicyKind, quantum: Option<i64>) -> Result<Self, ValidationError> {
        match kind {
            PolicyKind::Fcfs => Ok(Self::Fcfs),
            PolicyKind::Sjf => Ok(Self::Sjf),
            PolicyKind::Priority => Ok(Self::Priority),
            PolicyKind::RoundRobin => quantum
                .map(|quantum| Self::RoundRobin { quantum })
                .ok_or_else(|| {
                    ValidationError::new(
                        ValidationErrorKind::InvalidQuantum,
                        "Round-robin requires a time quantum",
                    )
                }),
        }
    }

    /// Parses a policy name and builds the policy.
    pub fn from_name(name: &str, quantum: Option<i64>) -> Result<Self, ValidationError> {
        Self::from_kind(name.parse()?, quantum)
    }

    /// Policy family.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::Sjf => PolicyKind::Sjf,
            Self::RoundRobin { .. } => PolicyKind::RoundRobin,
            Self::Priority => PolicyKind::Priority,
        }
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Creates a fresh strategy for one simulation run.
    ///
    /// Every rule-keyed policy breaks ties by arrival time, then by input
    /// position.
    pub fn strategy(&self) -> Box<dyn Strategy> {
        match self {
            Self::Fcfs => Box::new(RuleEngine::new().with_rule(rules::Fcfs)),
            Self::Sjf => Box::new(
                RuleEngine::new()
                    .with_rule(rules::Sjf)
                    .with_tie_breaker(rules::Fcfs),
            ),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(*quantum)),
            Self::Priority => Box::new(
                RuleEngine::new()
                    .with_rule(rules::Priority)
                    .with_tie_breaker(rules::Fcfs),
            ),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.kind().as_str()),
        }
    }
}
