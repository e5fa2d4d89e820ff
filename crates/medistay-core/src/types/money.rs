//! Fixed-point money type.
//!
//! Amounts are stored as integer minor units (cents) to avoid floating-point
//! rounding in price computation. Stored in PostgreSQL as `BIGINT` when the
//! `sqlx` feature is enabled.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A monetary amount in integer minor units (cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Create an amount from minor units (cents).
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole major units (e.g. dollars).
    pub fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Return the amount in minor units.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a non-negative count (e.g. nights), failing on overflow.
    pub fn checked_mul(&self, count: i64) -> AppResult<Money> {
        self.0
            .checked_mul(count)
            .map(Money)
            .ok_or_else(|| AppError::internal("Money multiplication overflow"))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for Money {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Money {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Money {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        <i64 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(100).cents(), 10_000);
    }

    #[test]
    fn test_checked_mul() {
        let nightly = Money::from_major(100);
        let total = nightly.checked_mul(3).expect("no overflow");
        assert_eq!(total, Money::from_major(300));
    }

    #[test]
    fn test_checked_mul_overflow() {
        assert!(Money(i64::MAX).checked_mul(2).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(12_345).to_string(), "123.45");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_add() {
        assert_eq!(Money(150) + Money(75), Money(225));
    }
}
