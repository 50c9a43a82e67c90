//! Execution timeline (Gantt chart data).
//!
//! A timeline is the ordered list of CPU segments produced by one
//! simulation run. Segments are either executions of a process or idle
//! gaps, and together they cover `[0, makespan]` without holes.

use serde::{Deserialize, Serialize};

/// Label used for idle segments when rendering.
pub const IDLE_LABEL: &str = "IDLE";

/// One contiguous stretch of CPU time.
///
/// Both variants satisfy `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineSegment {
    /// The CPU runs `process_id` during `[start, end)`.
    Execution {
        /// Process occupying the CPU.
        process_id: String,
        /// Start tick.
        start: i64,
        /// End tick (exclusive).
        end: i64,
    },
    /// No process is ready during `[start, end)`.
    Idle {
        /// Start tick.
        start: i64,
        /// End tick (exclusive).
        end: i64,
    },
}

impl TimelineSegment {
    /// Creates an execution segment.
    pub fn execution(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self::Execution {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::Idle { start, end }
    }

    /// Start tick.
    #[inline]
    pub fn start(&self) -> i64 {
        match self {
            Self::Execution { start, .. } | Self::Idle { start, .. } => *start,
        }
    }

    /// End tick (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        match self {
            Self::Execution { end, .. } | Self::Idle { end, .. } => *end,
        }
    }

    /// Length of the segment in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end() - self.start()
    }

    /// Whether this is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    /// Process running in this segment, `None` for idle gaps.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::Execution { process_id, .. } => Some(process_id),
            Self::Idle { .. } => None,
        }
    }

    /// Display label: the process id, or [`IDLE_LABEL`].
    pub fn label(&self) -> &str {
        self.process_id().unwrap_or(IDLE_LABEL)
    }
}

/// Ordered, gap-free sequence of timeline segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    ///
    /// Empty segments are dropped. A segment that directly continues the
    /// previous one with the same owner (same process, or idle after idle)
    /// extends it instead of being pushed separately.
    pub fn push(&mut self, segment: TimelineSegment) {
        if segment.duration() <= 0 {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.end() == segment.start() {
                match (last, &segment) {
                    (
                        TimelineSegment::Execution { process_id, end, .. },
                        TimelineSegment::Execution {
                            process_id: next_id,
                            end: next_end,
                            ..
                        },
                    ) if process_id == next_id => {
                        *end = *next_end;
                        return;
                    }
                    (
                        TimelineSegment::Idle { end, .. },
                        TimelineSegment::Idle { end: next_end, .. },
                    ) => {
                        *end = *next_end;
                        return;
                    }
                    _ => {}
                }
            }
        }
        self.segments.push(segment);
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end()).unwrap_or(0)
    }

    /// Total ticks spent idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Total ticks spent executing any process.
    pub fn busy_time(&self) -> i64 {
        self.makespan() - self.idle_time()
    }

    /// Idle segments only.
    pub fn idle_segments(&self) -> Vec<&TimelineSegment> {
        self.segments.iter().filter(|s| s.is_idle()).collect()
    }

    /// Execution segments belonging to one process.
    pub fn segments_for_process(&self, process_id: &str) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id() == Some(process_id))
            .collect()
    }

    /// Total ticks a process spent on the CPU.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.segments_for_process(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Tick at which a process first got the CPU.
    pub fn first_start(&self, process_id: &str) -> Option<i64> {
        self.segments
            .iter()
            .find(|s| s.process_id() == Some(process_id))
            .map(|s| s.start())
    }

    /// Axis ticks for a Gantt chart: every segment start plus the final end.
    pub fn boundaries(&self) -> Vec<i64> {
        let mut ticks: Vec<i64> = self.segments.iter().map(|s| s.start()).collect();
        if let Some(last) = self.segments.last() {
            ticks.push(last.end());
        }
        ticks
    }

    /// Whether the segments cover `[0, makespan]` without gaps or overlaps.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for segment in &self.segments {
            if segment.start() != cursor || segment.end() <= segment.start() {
                return false;
            }
            cursor = segment.end();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineSegment::idle(0, 2));
        t.push(TimelineSegment::execution("P1", 2, 4));
        t.push(TimelineSegment::execution("P2", 4, 7));
        t.push(TimelineSegment::execution("P1", 7, 8));
        t
    }

    #[test]
    fn test_segment_accessors() {
        let e = TimelineSegment::execution("P1", 3, 8);
        assert_eq!(e.start(), 3);
        assert_eq!(e.end(), 8);
        assert_eq!(e.duration(), 5);
        assert!(!e.is_idle());
        assert_eq!(e.label(), "P1");

        let i = TimelineSegment::idle(0, 3);
        assert!(i.is_idle());
        assert_eq!(i.process_id(), None);
        assert_eq!(i.label(), IDLE_LABEL);
    }

    #[test]
    fn test_timeline_queries() {
        let t = sample_timeline();
        assert_eq!(t.len(), 4);
        assert_eq!(t.makespan(), 8);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.busy_time(), 6);
        assert_eq!(t.executed_time("P1"), 3);
        assert_eq!(t.executed_time("P2"), 3);
        assert_eq!(t.first_start("P2"), Some(4));
        assert_eq!(t.first_start("P9"), None);
        assert_eq!(t.segments_for_process("P1").len(), 2);
        assert_eq!(t.idle_segments().len(), 1);
        assert!(t.is_contiguous());
    }

    #[test]
    fn test_boundaries() {
        let t = sample_timeline();
        assert_eq!(t.boundaries(), vec![0, 2, 4, 7, 8]);
        assert!(Timeline::new().boundaries().is_empty());
    }

    #[test]
    fn test_push_coalesces_same_owner() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::execution("P1", 0, 2));
        t.push(TimelineSegment::execution("P1", 2, 4));
        t.push(TimelineSegment::idle(4, 5));
        t.push(TimelineSegment::idle(5, 6));
        t.push(TimelineSegment::execution("P1", 6, 7));

        assert_eq!(
            t.segments(),
            &[
                TimelineSegment::execution("P1", 0, 4),
                TimelineSegment::idle(4, 6),
                TimelineSegment::execution("P1", 6, 7),
            ]
        );
    }

    #[test]
    fn test_push_drops_empty_segment() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::idle(3, 3));
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
    }

    #[test]
    fn test_gap_is_not_contiguous() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::execution("P1", 0, 2));
        t.push(TimelineSegment::execution("P2", 3, 5));
        assert!(!t.is_contiguous());

        let mut late_start = Timeline::new();
        late_start.push(TimelineSegment::execution("P1", 1, 2));
        assert!(!late_start.is_contiguous());
    }

    #[test]
    fn test_segment_serialization() {
        let json = serde_json::to_string(&TimelineSegment::idle(0, 2)).unwrap();
        assert_eq!(json, r#"{"kind":"idle","start":0,"end":2}"#);
    }
}
