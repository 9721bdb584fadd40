//! # Reflex Infrastructure
//!
//! Concrete implementations of the ports defined in `reflex-core`:
//! JWT token issuance/verification, Argon2 password hashing, and the
//! in-memory account and reaction-time stores.

pub mod auth;
pub mod store;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use store::{InMemoryAccounts, InMemoryReactionTimes};
