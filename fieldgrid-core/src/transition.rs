/// Layout transition scheduling
///
/// Recomputation happens synchronously on the event that triggered it, but
/// the visual result is applied on the host's next event-loop turn. The
/// scheduler is the hand-off point: a single pending slot that each new
/// transition supersedes wholesale.
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::viewport::CenteringOffset;

/// One animated visual application of (offset, scale).
///
/// A taken transition is applied fully within one event-loop turn; there is
/// no partial application and no cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTransition {
    pub offset: CenteringOffset,
    pub scale: f32,
    pub duration: Duration,
}

/// Callback run after the host finishes applying a transition
pub type TransitionCompletion = Box<dyn FnOnce() + Send>;

struct Pending {
    transition: LayoutTransition,
    completion: Option<TransitionCompletion>,
}

/// Single-slot hand-off between the controller and the host's event loop.
///
/// Scheduling replaces whatever was pending: a transition is either applied
/// on the next turn or superseded wholesale, never both. Clones share the
/// same slot.
#[derive(Clone, Default)]
pub struct TransitionScheduler {
    pending: Arc<Mutex<Option<Pending>>>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, transition: LayoutTransition) {
        self.schedule_with_completion(transition, None);
    }

    pub fn schedule_with_completion(
        &self,
        transition: LayoutTransition,
        completion: Option<TransitionCompletion>,
    ) {
        *self.pending.lock() = Some(Pending {
            transition,
            completion,
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Take the pending transition for this event-loop turn.
    ///
    /// The caller applies the returned transition fully, then calls
    /// [`ScheduledTransition::finish`].
    pub fn take(&self) -> Option<ScheduledTransition> {
        self.pending.lock().take().map(|pending| ScheduledTransition {
            transition: pending.transition,
            completion: pending.completion,
        })
    }
}

/// A transition checked out by the host for application
pub struct ScheduledTransition {
    pub transition: LayoutTransition,
    completion: Option<TransitionCompletion>,
}

impl ScheduledTransition {
    /// Report full application; fires the completion callback
    pub fn finish(mut self) {
        if let Some(completion) = self.completion.take() {
            completion();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn transition(scale: f32) -> LayoutTransition {
        LayoutTransition {
            offset: CenteringOffset::ORIGIN,
            scale,
            duration: Duration::from_millis(300),
        }
    }

    #[test]
    fn test_take_empties_the_slot() {
        let scheduler = TransitionScheduler::new();
        assert!(scheduler.take().is_none());

        scheduler.schedule(transition(1.0));
        assert!(scheduler.has_pending());

        let scheduled = scheduler.take().unwrap();
        assert_eq!(scheduled.transition.scale, 1.0);
        assert!(!scheduler.has_pending());
        assert!(scheduler.take().is_none());
    }

    #[test]
    fn test_scheduling_supersedes_the_pending_transition() {
        let scheduler = TransitionScheduler::new();
        scheduler.schedule(transition(1.0));
        scheduler.schedule(transition(0.5));

        let scheduled = scheduler.take().unwrap();
        assert_eq!(scheduled.transition.scale, 0.5);
        assert!(scheduler.take().is_none());
    }

    #[test]
    fn test_completion_fires_after_finish() {
        let scheduler = TransitionScheduler::new();
        let finished = Arc::new(AtomicUsize::new(0));

        let counter = finished.clone();
        scheduler.schedule_with_completion(
            transition(1.0),
            Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );

        let scheduled = scheduler.take().unwrap();
        assert_eq!(finished.load(Ordering::SeqCst), 0);
        scheduled.finish();
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_superseded_completion_never_fires() {
        let scheduler = TransitionScheduler::new();
        let finished = Arc::new(AtomicUsize::new(0));

        let counter = finished.clone();
        scheduler.schedule_with_completion(
            transition(1.0),
            Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );
        scheduler.schedule(transition(0.5));

        scheduler.take().unwrap().finish();
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }
}
