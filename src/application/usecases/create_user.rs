use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User},
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let new_user = NewUser::new(request.name, request.email)?;
        let user = self.repo.create(new_user).await?;

        debug!(user_id = %user.id, "user created");
        Ok(user)
    }
}
