//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT verification configuration.
///
/// Medistay only *verifies* tokens; issuing them is the identity provider's
/// job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the token issuer.
    pub jwt_secret: String,
    /// Clock-skew leeway in seconds when validating expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    5
}
