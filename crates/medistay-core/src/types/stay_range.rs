//! Half-open date range for cabin stays.
//!
//! A stay occupies `[check_in, check_out)` — the checkout day itself is not
//! occupied, so a booking ending on day N and another starting on day N do
//! not conflict (back-to-back turnover).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A validated half-open `[check_in, check_out)` date range.
///
/// Construction guarantees `check_in < check_out`, so a `StayRange` always
/// covers at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Create a new stay range, rejecting empty or inverted ranges.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<Self> {
        if check_in >= check_out {
            return Err(AppError::validation(
                "Check-out date must be after check-in date",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// The first occupied day.
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// The day the cabin is vacated (not occupied).
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights in the stay. Always at least 1.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap test: `[a,b)` and `[c,d)` overlap iff `a < d && c < b`.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Whether the stay fits entirely inside the window `[start, end]`.
    pub fn fits_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.check_in && self.check_out <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date")
    }

    fn range(a: u32, b: u32) -> StayRange {
        StayRange::new(d(a), d(b)).expect("valid range")
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(StayRange::new(d(5), d(3)).is_err());
    }

    #[test]
    fn test_rejects_zero_night_range() {
        assert!(StayRange::new(d(5), d(5)).is_err());
    }

    #[test]
    fn test_nights() {
        assert_eq!(range(1, 4).nights(), 3);
        assert_eq!(range(1, 2).nights(), 1);
    }

    #[test]
    fn test_overlap_matches_predicate_over_small_grid() {
        // For all [a,b), [c,d) with a<b, c<d over a small day grid:
        // overlap ⟺ a < d && c < b.
        for a in 1..8u32 {
            for b in (a + 1)..9 {
                for c in 1..8u32 {
                    for dd in (c + 1)..9 {
                        let lhs = range(a, b);
                        let rhs = range(c, dd);
                        let expected = d(a) < d(dd) && d(c) < d(b);
                        assert_eq!(
                            lhs.overlaps(&rhs),
                            expected,
                            "[{a},{b}) vs [{c},{dd})"
                        );
                        // Overlap is symmetric.
                        assert_eq!(lhs.overlaps(&rhs), rhs.overlaps(&lhs));
                    }
                }
            }
        }
    }

    #[test]
    fn test_back_to_back_turnover_does_not_conflict() {
        // Existing stay ends on day 5; new stay starts on day 5.
        assert!(!range(2, 5).overlaps(&range(5, 7)));
    }

    #[test]
    fn test_one_day_overlap_conflicts() {
        // Existing stay ends on day 5; new stay starts on day 4.
        assert!(range(2, 5).overlaps(&range(4, 7)));
    }

    #[test]
    fn test_fits_within() {
        let stay = range(5, 9);
        assert!(stay.fits_within(d(1), d(10)));
        assert!(stay.fits_within(d(5), d(9)));
        assert!(!stay.fits_within(d(6), d(10)));
        assert!(!stay.fits_within(d(1), d(8)));
    }
}
