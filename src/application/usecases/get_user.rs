use std::sync::Arc;

use crate::domain::{
    errors::DomainError, models::User, repositories::UserRepository, value_objects::UserId,
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }
}
