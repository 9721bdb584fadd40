use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity - one registered user.
///
/// `password_hash` is always the output of the one-way hash; the plaintext
/// credential never reaches the store. `role` is the elevated/standard flag
/// carried into issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: bool,
}

/// Fields for a not-yet-persisted account. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: bool,
}

/// Partial update for an account. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<bool>,
}
