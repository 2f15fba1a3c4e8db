use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::usecases::{
        create_user::CreateUserUseCase, delete_user::DeleteUserUseCase,
        get_user::GetUserUseCase, list_users::ListUsersUseCase,
    },
    domain::repositories::UserRepository,
};

#[derive(Clone)]
pub struct ApiState {
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            list_users_usecase: Arc::new(ListUsersUseCase::new(repo.clone())),
            create_user_usecase: Arc::new(CreateUserUseCase::new(repo.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(repo.clone())),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(repo)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    System,
    Users,
}

/// Home page and health check. Holds no state.
#[derive(Clone, Default)]
pub struct SystemEndpoints;
