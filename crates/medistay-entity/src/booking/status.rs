//! Booking lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a cabin booking.
///
/// Legal transitions: PENDING → CONFIRMED → CHECKED_IN → CHECKED_OUT, and
/// any non-terminal state → CANCELLED. CHECKED_OUT and CANCELLED are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created by the patient, awaiting admin confirmation.
    Pending,
    /// Confirmed by an admin; the dates are held.
    Confirmed,
    /// The patient has arrived.
    CheckedIn,
    /// The stay is complete.
    CheckedOut,
    /// Cancelled by the patient or an admin.
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking in this state occupies its dates for conflict
    /// detection. PENDING bookings deliberately do not hold inventory.
    pub fn blocks_availability(&self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Whether this state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Whether the booking can still be cancelled from this state.
    pub fn is_cancellable(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether a transition from this state to `next` is legal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::Confirmed) => true,
            (Self::Confirmed, Self::CheckedIn) => true,
            (Self::CheckedIn, Self::CheckedOut) => true,
            (from, Self::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = medistay_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(medistay_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: pending, confirmed, checked_in, checked_out, cancelled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::CheckedIn));
        assert!(BookingStatus::CheckedIn.can_transition_to(BookingStatus::CheckedOut));
    }

    #[test]
    fn test_cancellation_from_non_terminal_states() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::CheckedIn.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for next in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ] {
            assert!(!BookingStatus::CheckedOut.can_transition_to(next));
            assert!(!BookingStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_no_skipping_states() {
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::CheckedIn));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::CheckedOut));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::CheckedOut));
    }

    #[test]
    fn test_only_confirmed_and_checked_in_block_availability() {
        assert!(BookingStatus::Confirmed.blocks_availability());
        assert!(BookingStatus::CheckedIn.blocks_availability());
        assert!(!BookingStatus::Pending.blocks_availability());
        assert!(!BookingStatus::CheckedOut.blocks_availability());
        assert!(!BookingStatus::Cancelled.blocks_availability());
    }

    #[test]
    fn test_from_str_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ] {
            let parsed: BookingStatus = status.as_str().parse().expect("should parse");
            assert_eq!(parsed, status);
        }
        assert!("unknown".parse::<BookingStatus>().is_err());
    }
}
