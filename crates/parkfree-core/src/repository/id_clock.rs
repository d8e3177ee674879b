//! Id Allocation
//!
//! Local ids are the current time in milliseconds, bumped past anything
//! already handed out or loaded, so two appends in the same millisecond
//! still get distinct ids.

use std::cell::Cell;

use crate::domain::{Entity, LocationId};

#[derive(Debug, Default)]
pub struct IdClock {
    last: Cell<i64>,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never hand out an id at or below any of these
    pub fn observe<T: Entity<Id = LocationId>>(&self, records: &[T]) {
        if let Some(max) = records.iter().map(|r| r.id().0).max() {
            if max > self.last.get() {
                self.last.set(max);
            }
        }
    }

    pub fn next(&self) -> LocationId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    fn next_at(&self, now_millis: i64) -> LocationId {
        let id = now_millis.max(self.last.get() + 1);
        self.last.set(id);
        LocationId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    fn loc(id: i64) -> Location {
        Location {
            id: LocationId(id),
            name: format!("Location {}", id),
            lat: 0.0,
            lng: 0.0,
            hours: "Any".to_string(),
        }
    }

    #[test]
    fn test_uses_clock_when_ahead() {
        let clock = IdClock::new();
        assert_eq!(clock.next_at(1_700_000_000_000), LocationId(1_700_000_000_000));
    }

    #[test]
    fn test_same_millisecond_is_bumped() {
        let clock = IdClock::new();
        let a = clock.next_at(500);
        let b = clock.next_at(500);
        let c = clock.next_at(499);
        assert_eq!(a, LocationId(500));
        assert_eq!(b, LocationId(501));
        assert_eq!(c, LocationId(502));
    }

    #[test]
    fn test_observed_ids_are_never_reused() {
        let clock = IdClock::new();
        clock.observe(&[loc(3), loc(9_000), loc(12)]);
        assert_eq!(clock.next_at(10), LocationId(9_001));
    }

    #[test]
    fn test_real_clock_is_monotonic() {
        let clock = IdClock::new();
        let ids: Vec<_> = (0..50).map(|_| clock.next()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
