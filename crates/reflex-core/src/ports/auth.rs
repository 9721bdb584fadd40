//! Authentication and authorization ports.

use thiserror::Error;
use uuid::Uuid;

/// Identity assertion decoded from a verified token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub account_id: Uuid,
    pub email: String,
    pub role: bool,
    pub exp: i64,
}

/// Signed, time-limited identity tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token asserting the given identity, expiring after the
    /// service's configured TTL.
    fn issue(&self, account_id: Uuid, email: &str, role: bool) -> Result<String, AuthError>;

    /// Verify signature and expiry and decode the payload. Bad signature,
    /// expired, and malformed payload are one indistinguishable failure.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// One-way salted password hashing.
pub trait PasswordService: Send + Sync {
    /// Hash a plaintext password. Salted per call; never fails for
    /// well-formed input.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash. Comparison is
    /// constant-time, delegated to the hashing primitive.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication failures. The token gate maps the first three to 403;
/// `Signing` and `Hashing` are server faults.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Access denied: missing token")]
    TokenMissing,

    #[error("Access denied: invalid token")]
    TokenInvalid,

    #[error("You do not have the right token")]
    NotOwner,

    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("hashing error: {0}")]
    Hashing(String),
}
