use std::sync::Arc;

use tracing::debug;

use crate::domain::{errors::DomainError, repositories::UserRepository, value_objects::UserId};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> Result<(), DomainError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(DomainError::NotFound(id.to_string()));
        }

        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
