use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, User},
    value_objects::UserId,
};

/// Ordered store of user records. Implementations hand out copies, never
/// references into their own storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    /// Assigns the next identifier and a creation timestamp, then appends.
    async fn create(&self, new_user: NewUser) -> anyhow::Result<User>;
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;
    /// Returns `false` when no record carries `id`.
    async fn delete_by_id(&self, id: UserId) -> anyhow::Result<bool>;
}
