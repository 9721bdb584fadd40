//! Application state - shared across all handlers.

use std::sync::Arc;

use reflex_core::ports::{
    AccountRepository, PasswordService, ReactionTimeRepository, TokenService,
};
use reflex_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use reflex_infra::store::{InMemoryAccounts, InMemoryReactionTimes};

/// Shared application state. The token service owns the process-wide
/// secret, read-only after startup; the stores are externally pooled from
/// the handlers' point of view.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub timers: Arc<dyn ReactionTimeRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state over the in-memory stores.
    pub fn new(token_config: JwtConfig) -> Self {
        Self {
            accounts: Arc::new(InMemoryAccounts::new()),
            timers: Arc::new(InMemoryReactionTimes::new()),
            tokens: Arc::new(JwtTokenService::new(token_config)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
