//! Cooperative timer registry
//!
//! One-shot deadlines keyed by callback identity, polled from the UI update
//! loop. There is no background thread: whatever frame first observes a
//! deadline as due runs the callback, synchronously, on the UI thread.
//! Scheduling an id that is already pending replaces its deadline, so a
//! callback identity never has two schedules in flight.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identity of a schedulable callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// One-time arming attempt shortly after application start
    StartupArm,
    /// The recurring autosave decision tick
    AutosaveTick,
}

/// Pending one-shot deadlines, one slot per `TimerId`
#[derive(Debug, Default)]
pub struct TimerRegistry {
    slots: HashMap<TimerId, Instant>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `id` to fire `after` from now, replacing any pending deadline
    pub fn schedule(&mut self, id: TimerId, after: Duration) {
        self.schedule_at(id, Instant::now() + after);
    }

    /// Schedule `id` for an absolute deadline, replacing any pending one
    pub fn schedule_at(&mut self, id: TimerId, deadline: Instant) {
        self.slots.insert(id, deadline);
    }

    /// Drop any pending deadline for `id`; returns whether one was pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.slots.remove(&id).is_some()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of pending deadlines
    pub fn pending(&self) -> usize {
        self.slots.len()
    }

    /// Remove and return every id whose deadline has passed, earliest first.
    /// A returned id is no longer scheduled; callbacks re-arm by scheduling
    /// again.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due: Vec<(Instant, TimerId)> = self
            .slots
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        for (_, id) in &due {
            self.slots.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_query() {
        let mut timers = TimerRegistry::new();
        assert!(!timers.is_scheduled(TimerId::AutosaveTick));

        timers.schedule(TimerId::AutosaveTick, Duration::from_secs(30));
        assert!(timers.is_scheduled(TimerId::AutosaveTick));
        assert!(!timers.is_scheduled(TimerId::StartupArm));

        assert!(timers.cancel(TimerId::AutosaveTick));
        assert!(!timers.is_scheduled(TimerId::AutosaveTick));
        assert!(!timers.cancel(TimerId::AutosaveTick));
    }

    #[test]
    fn test_reschedule_replaces_pending_deadline() {
        let mut timers = TimerRegistry::new();
        timers.schedule(TimerId::AutosaveTick, Duration::from_secs(600));
        timers.schedule(TimerId::AutosaveTick, Duration::from_secs(1));
        assert_eq!(timers.pending(), 1);

        // The replacement deadline is the live one
        let later = Instant::now() + Duration::from_secs(2);
        assert_eq!(timers.take_due(later), vec![TimerId::AutosaveTick]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_take_due_only_returns_elapsed_deadlines() {
        let base = Instant::now();
        let mut timers = TimerRegistry::new();
        timers.schedule_at(TimerId::StartupArm, base + Duration::from_secs(1));
        timers.schedule_at(TimerId::AutosaveTick, base + Duration::from_secs(60));

        let due = timers.take_due(base + Duration::from_secs(5));
        assert_eq!(due, vec![TimerId::StartupArm]);
        assert!(timers.is_scheduled(TimerId::AutosaveTick));
        assert!(!timers.is_scheduled(TimerId::StartupArm));
    }

    #[test]
    fn test_take_due_orders_by_deadline() {
        let base = Instant::now();
        let mut timers = TimerRegistry::new();
        timers.schedule_at(TimerId::AutosaveTick, base + Duration::from_millis(10));
        timers.schedule_at(TimerId::StartupArm, base + Duration::from_millis(20));

        let due = timers.take_due(base + Duration::from_secs(1));
        assert_eq!(due, vec![TimerId::AutosaveTick, TimerId::StartupArm]);
    }
}
