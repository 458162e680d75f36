//! Shared helpers

use uuid::Uuid;

/// Generate a prefixed 8-character uppercase token, e.g. `RES-1A2B3C4D`.
///
/// Collision probability is negligible but not zero; callers that require
/// uniqueness must still check the token against their ledger and retry.
pub fn prefixed_token(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, uuid[..8].to_uppercase())
}
