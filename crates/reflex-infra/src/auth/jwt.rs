//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reflex_core::ports::{AuthError, TokenClaims, TokenService};

/// Token TTL used by login.
pub const DEFAULT_TTL_HOURS: i64 = 10;

/// JWT token service configuration. The secret is supplied by the caller
/// at construction; there is no baked-in fallback.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_hours: DEFAULT_TTL_HOURS,
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // account id
    email: String,
    role: bool,
    exp: i64,
    iat: i64,
}

/// HS256 token service over a process-wide secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            ttl_hours: config.ttl_hours,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, account_id: Uuid, email: &str, role: bool) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.ttl_hours);

        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        // Bad signature, expiry, and a malformed payload all collapse into
        // the same failure; callers never observe a partially-trusted token.
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AuthError::TokenInvalid)?;

        let account_id =
            Uuid::parse_str(&token_data.claims.sub).map_err(|_| AuthError::TokenInvalid)?;

        Ok(TokenClaims {
            account_id,
            email: token_data.claims.email,
            role: token_data.claims.role,
            exp: token_data.claims.exp,
        })
    }
}
