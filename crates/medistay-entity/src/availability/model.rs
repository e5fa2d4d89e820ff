//! Availability period entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use medistay_core::types::{CabinId, PeriodId, StayRange};

/// An admin-declared window during which a cabin may be booked.
///
/// A cabin with no active periods is unrestricted: it is bookable on any
/// date, subject only to conflicts with existing bookings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailabilityPeriod {
    /// Unique period identifier.
    pub id: PeriodId,
    /// The cabin this window applies to.
    pub cabin_id: CabinId,
    /// First bookable check-in date.
    pub start_date: NaiveDate,
    /// Last permitted check-out date.
    pub end_date: NaiveDate,
    /// Whether the window is currently in force.
    pub is_active: bool,
    /// Optional admin note, e.g. "post-renovation reopening".
    pub reason: Option<String>,
    /// When the period was created.
    pub created_at: DateTime<Utc>,
}

impl AvailabilityPeriod {
    /// Whether a stay fits entirely inside this window.
    ///
    /// A stay must sit within a single window; it cannot span two windows
    /// even if they are contiguous.
    pub fn admits(&self, stay: &StayRange) -> bool {
        self.is_active && stay.fits_within(self.start_date, self.end_date)
    }
}

/// Data required to create a new availability period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityPeriod {
    /// The cabin the window applies to.
    pub cabin_id: CabinId,
    /// First bookable check-in date.
    pub start_date: NaiveDate,
    /// Last permitted check-out date. Must be after `start_date`.
    pub end_date: NaiveDate,
    /// Optional admin note.
    pub reason: Option<String>,
}

/// Data for updating an existing availability period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityPeriod {
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
    /// Enable or disable the window.
    pub is_active: Option<bool>,
    /// New admin note.
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    fn period(start: NaiveDate, end: NaiveDate, active: bool) -> AvailabilityPeriod {
        AvailabilityPeriod {
            id: PeriodId::new(),
            cabin_id: CabinId::new(),
            start_date: start,
            end_date: end,
            is_active: active,
            reason: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_admits_stay_inside_window() {
        let p = period(d(2025, 7, 1), d(2025, 7, 10), true);
        let stay = StayRange::new(d(2025, 7, 5), d(2025, 7, 9)).expect("valid");
        assert!(p.admits(&stay));
    }

    #[test]
    fn test_rejects_stay_past_window_end() {
        let p = period(d(2025, 7, 1), d(2025, 7, 10), true);
        let stay = StayRange::new(d(2025, 7, 8), d(2025, 7, 12)).expect("valid");
        assert!(!p.admits(&stay));
    }

    #[test]
    fn test_inactive_window_admits_nothing() {
        let p = period(d(2025, 7, 1), d(2025, 7, 10), false);
        let stay = StayRange::new(d(2025, 7, 5), d(2025, 7, 9)).expect("valid");
        assert!(!p.admits(&stay));
    }
}
