//! Cabin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use medistay_core::types::{CabinId, Money};

/// A bookable hospital cabin (private room/unit).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cabin {
    /// Unique cabin identifier.
    pub id: CabinId,
    /// Display name, e.g. "Cabin C101".
    pub name: String,
    /// Optional description shown to patients.
    pub description: Option<String>,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Nightly price in minor currency units.
    pub price_per_night: Money,
    /// Whether the cabin can currently be booked. Soft-delete flag.
    pub is_active: bool,
    /// When the cabin was created.
    pub created_at: DateTime<Utc>,
    /// When the cabin was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Cabin {
    /// Whether the given guest count fits this cabin.
    pub fn accommodates(&self, guests: i32) -> bool {
        guests >= 1 && guests <= self.capacity
    }
}

/// Data required to create a new cabin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCabin {
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Nightly price in minor currency units.
    pub price_per_night: Money,
}

/// Data for updating an existing cabin. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCabin {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New nightly price.
    pub price_per_night: Option<Money>,
    /// Activate or deactivate the cabin.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabin(capacity: i32) -> Cabin {
        Cabin {
            id: CabinId::new(),
            name: "Cabin C101".to_string(),
            description: None,
            capacity,
            price_per_night: Money::from_major(100),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_accommodates() {
        let c = cabin(2);
        assert!(c.accommodates(1));
        assert!(c.accommodates(2));
        assert!(!c.accommodates(3));
        assert!(!c.accommodates(0));
    }
}
