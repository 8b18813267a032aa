//! Step tracing for external consumers such as an animated visualizer.
//!
//! The engine reports every comparison, swap, write, bucket assignment and
//! radix digit pass to a `StepObserver` *after* the step has happened. An
//! observer only ever receives indices, never a handle to the sequence, so it
//! cannot influence the outcome or ordering of a sort.

use serde::{Deserialize, Serialize};

//==================================================================================
// 1. Events
//==================================================================================

/// A single instrumented step of a sort.
///
/// Indices always refer to positions in the caller's sequence. For merge,
/// comparisons between the two temporary halves are reported at the positions
/// the compared elements occupied when the merge began.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SortEvent {
    Compare { i: usize, j: usize },
    Swap { i: usize, j: usize },
    Write { index: usize },
    BucketAssign { index: usize, bucket: usize },
    DigitPass { exponent: u64 },
}

//==================================================================================
// 2. Observer Capability
//==================================================================================

/// Receives step notifications from a running sort.
pub trait StepObserver {
    fn on_event(&mut self, event: SortEvent);
}

/// Discards every event. The default when no tracing is requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: SortEvent) {}
}

/// Adapts any `FnMut(SortEvent)` closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F> StepObserver for FnObserver<F>
where
    F: FnMut(SortEvent),
{
    #[inline]
    fn on_event(&mut self, event: SortEvent) {
        (self.0)(event)
    }
}

/// Records every event in order. Mainly useful for tests and replay.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<SortEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_compares(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SortEvent::Compare { .. }))
            .count()
    }

    pub fn count_swaps(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SortEvent::Swap { .. }))
            .count()
    }

    pub fn count_writes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SortEvent::Write { .. }))
            .count()
    }
}

impl StepObserver for RecordingObserver {
    fn on_event(&mut self, event: SortEvent) {
        self.events.push(event);
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_observer_forwards_events() {
        let mut seen = Vec::new();
        {
            let mut obs = FnObserver(|e: SortEvent| seen.push(e));
            obs.on_event(SortEvent::Swap { i: 0, j: 1 });
            obs.on_event(SortEvent::Write { index: 3 });
        }
        assert_eq!(
            seen,
            vec![SortEvent::Swap { i: 0, j: 1 }, SortEvent::Write { index: 3 }]
        );
    }

    #[test]
    fn test_recording_observer_counts() {
        let mut rec = RecordingObserver::new();
        rec.on_event(SortEvent::Compare { i: 0, j: 1 });
        rec.on_event(SortEvent::Compare { i: 1, j: 2 });
        rec.on_event(SortEvent::Swap { i: 1, j: 2 });
        rec.on_event(SortEvent::BucketAssign { index: 0, bucket: 2 });
        assert_eq!(rec.count_compares(), 2);
        assert_eq!(rec.count_swaps(), 1);
        assert_eq!(rec.count_writes(), 0);
        assert_eq!(rec.events.len(), 4);
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let json = serde_json::to_string(&SortEvent::Compare { i: 2, j: 5 }).unwrap();
        assert_eq!(json, r#"{"event":"compare","i":2,"j":5}"#);
    }
}
