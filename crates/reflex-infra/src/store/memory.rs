//! In-memory account and reaction-time stores.
//!
//! The uniqueness check and the mutation happen under one write lock, so
//! two concurrent registrations with the same email resolve to exactly one
//! success and one `DuplicateKey`. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use reflex_core::StoreError;
use reflex_core::domain::{Account, AccountPatch, NewAccount, ReactionTime};
use reflex_core::ports::{AccountRepository, ReactionTimeRepository};

/// In-memory account directory keyed by store-assigned id.
pub struct InMemoryAccounts {
    rows: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAccounts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let rows = self.rows.read().await;
        // exact, case-sensitive match
        Ok(rows.values().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut rows = self.rows.write().await;

        if rows.values().any(|a| a.email == account.email) {
            return Err(StoreError::DuplicateKey);
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: account.email,
            password_hash: account.password_hash,
            role: account.role,
        };
        rows.insert(account.id, account.clone());

        Ok(account)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: AccountPatch,
    ) -> Result<Option<Account>, StoreError> {
        let mut rows = self.rows.write().await;

        if let Some(email) = &patch.email {
            if rows.values().any(|a| a.id != id && a.email == *email) {
                return Err(StoreError::DuplicateKey);
            }
        }

        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = patch.email {
            row.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            row.password_hash = password_hash;
        }
        if let Some(role) = patch.role {
            row.role = role;
        }

        Ok(Some(row.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        rows.remove(&id);
        Ok(())
    }
}

/// In-memory reaction-time records, append-only per account.
pub struct InMemoryReactionTimes {
    rows: RwLock<Vec<ReactionTime>>,
}

impl InMemoryReactionTimes {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReactionTimes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReactionTimeRepository for InMemoryReactionTimes {
    async fn insert(&self, account_id: Uuid, millis: i64) -> Result<ReactionTime, StoreError> {
        let mut rows = self.rows.write().await;

        let record = ReactionTime {
            id: Uuid::new_v4(),
            account_id,
            millis,
        };
        rows.push(record.clone());

        Ok(record)
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<ReactionTime>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect())
    }
}
