//! Lending rules: how a book's owner and assignment time change on
//! assign/release, and when an assigned book becomes overdue.
//!
//! Everything here is pure; callers pass the current instant and persist the
//! mutated book themselves.

use chrono::{DateTime, Duration, Utc};

use crate::models::book::Book;

/// Ten days, in milliseconds
pub const OVERDUE_AFTER_MS: i64 = 864_000_000;

/// Elapsed time after which an assigned book is overdue (inclusive)
pub fn overdue_threshold() -> Duration {
    Duration::milliseconds(OVERDUE_AFTER_MS)
}

/// `true` once `assigned_at` lies at least the threshold in the past.
/// A book that was never assigned is never overdue.
pub fn is_overdue(assigned_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match assigned_at {
        Some(since) => now.signed_duration_since(since) >= overdue_threshold(),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LendingState {
    Available,
    Assigned {
        owner_id: i32,
        since: Option<DateTime<Utc>>,
    },
}

impl Book {
    pub fn lending_state(&self) -> LendingState {
        match self.owner_id {
            Some(owner_id) => LendingState::Assigned {
                owner_id,
                since: self.assigned_at,
            },
            None => LendingState::Available,
        }
    }

    /// Hand the book to `owner_id`. An existing assignment is overwritten;
    /// the previous owner is returned.
    pub fn assign(&mut self, owner_id: i32, now: DateTime<Utc>) -> Option<i32> {
        let previous = self.owner_id.replace(owner_id);
        self.assigned_at = Some(now);
        self.overdue = false;
        previous
    }

    /// Clear owner and assignment time together. Returns the previous owner.
    pub fn release(&mut self) -> Option<i32> {
        self.assigned_at = None;
        self.overdue = false;
        self.owner_id.take()
    }

    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        is_overdue(self.assigned_at, now)
    }

    /// Set the transient `overdue` flag for display and return it
    pub fn mark_overdue(&mut self, now: DateTime<Utc>) -> bool {
        self.overdue = self.is_overdue_at(now);
        self.overdue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book() -> Book {
        Book {
            id: 1,
            title: "Kobzar".to_string(),
            author: "Taras Shevchenko".to_string(),
            year: 1840,
            owner_id: None,
            assigned_at: None,
            overdue: false,
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_never_assigned_is_not_overdue() {
        let b = book();
        assert!(!b.is_overdue_at(t0()));
        assert!(!b.is_overdue_at(t0() + Duration::days(10_000)));
        assert_eq!(b.lending_state(), LendingState::Available);
    }

    #[test]
    fn test_overdue_boundary_is_inclusive() {
        let mut b = book();
        b.assign(3, t0());

        let boundary = t0() + Duration::milliseconds(OVERDUE_AFTER_MS);
        assert!(!b.is_overdue_at(boundary - Duration::milliseconds(1)));
        assert!(b.is_overdue_at(boundary));
        assert!(b.is_overdue_at(boundary + Duration::days(1)));
        assert_eq!(overdue_threshold(), Duration::days(10));
    }

    #[test]
    fn test_assign_sets_owner_and_timestamp() {
        let mut b = book();
        let previous = b.assign(3, t0());

        assert_eq!(previous, None);
        assert_eq!(b.owner_id, Some(3));
        assert_eq!(b.assigned_at, Some(t0()));
        assert_eq!(
            b.lending_state(),
            LendingState::Assigned { owner_id: 3, since: Some(t0()) }
        );
    }

    #[test]
    fn test_reassign_overwrites_previous_owner() {
        let mut b = book();
        b.assign(3, t0());
        let later = t0() + Duration::days(12);
        b.mark_overdue(later);
        assert!(b.overdue);

        let previous = b.assign(4, later);

        assert_eq!(previous, Some(3));
        assert_eq!(b.owner_id, Some(4));
        assert_eq!(b.assigned_at, Some(later));
        assert!(!b.overdue);
    }

    #[test]
    fn test_release_clears_owner_and_timestamp() {
        let mut b = book();
        b.assign(3, t0());

        assert_eq!(b.release(), Some(3));
        assert_eq!(b.owner_id, None);
        assert_eq!(b.assigned_at, None);
        assert!(!b.mark_overdue(t0() + Duration::days(30)));
    }

    #[test]
    fn test_release_of_available_book_is_noop() {
        let mut b = book();
        assert_eq!(b.release(), None);
        assert_eq!(b.lending_state(), LendingState::Available);
    }

    #[test]
    fn test_mark_overdue_sets_flag() {
        let mut b = book();
        b.assign(3, t0());
        assert!(!b.mark_overdue(t0() + Duration::days(9)));
        assert!(!b.overdue);
        assert!(b.mark_overdue(t0() + Duration::days(10)));
        assert!(b.overdue);
    }
}
