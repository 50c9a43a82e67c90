//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! # Domain Mappings
//!
//! | u-cpusim | Operating system | Batch queue |
//! |----------|------------------|-------------|
//! | Process | Process/Thread | Job |
//! | TimelineSegment | Dispatch slice | Run window |
//! | ProcessResult | Accounting record | Job report |
//! | SimulationOutcome | Gantt chart + table | Queue history |

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessResult, SimulationOutcome};
pub use process::Process;
pub use timeline::{Timeline, TimelineSegment, IDLE_LABEL};
