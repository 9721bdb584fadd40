//! Store-level error types.

use thiserror::Error;

/// Failures surfaced by the account and reaction-time stores.
///
/// `DuplicateKey` is the email-uniqueness violation and is the only store
/// condition callers branch on; everything else is `Unavailable` and fatal
/// for the request that hit it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key")]
    DuplicateKey,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
