use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, AccountPatch, NewAccount, ReactionTime};
use crate::error::StoreError;

/// Account directory - the contract over the external document store.
///
/// Email lookup is exact and case-sensitive. Email uniqueness is the
/// store's responsibility: `create` and `update_by_id` fail with
/// `StoreError::DuplicateKey` when it would be violated, which is how the
/// concurrent-registration race resolves to exactly one winner.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Persist a new account; the store assigns the id.
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Apply a partial update. `None` patch fields are left untouched.
    /// Returns the updated account, or `None` if the id does not exist.
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: AccountPatch,
    ) -> Result<Option<Account>, StoreError>;

    /// Delete by id. Succeeds whether or not the id exists.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Reaction-time records, scoped per account.
#[async_trait]
pub trait ReactionTimeRepository: Send + Sync {
    async fn insert(&self, account_id: Uuid, millis: i64) -> Result<ReactionTime, StoreError>;

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<ReactionTime>, StoreError>;
}
