//! Human-readable booking reference generation.
//!
//! References look like `CB-483921-X7QF`: a fixed prefix, a fragment of the
//! creation timestamp, and a short random suffix. Uniqueness is
//! probabilistic; the database column carries a UNIQUE constraint so the
//! rare collision surfaces as a conflict instead of a duplicate.

use chrono::{DateTime, Utc};
use rand::RngExt;

/// Fixed reference prefix.
const PREFIX: &str = "CB";
/// Number of random suffix characters.
const SUFFIX_LEN: usize = 4;
/// Uppercase alphanumeric suffix alphabet.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a booking reference from the creation instant.
pub fn generate(created_at: DateTime<Utc>) -> String {
    let fragment = created_at.timestamp() % 1_000_000;
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{PREFIX}-{fragment:06}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let number = generate(Utc::now());
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "CB");
        assert_eq!(parts[1].len(), 6);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_timestamp_fragment_is_stable() {
        let now = Utc::now();
        let a = generate(now);
        let b = generate(now);
        assert_eq!(a.split('-').nth(1), b.split('-').nth(1));
    }
}
