use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use tracing::error;

use crate::{
    application::usecases::create_user::CreateUserRequest,
    domain::{errors::DomainError, value_objects::UserId},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::CreateUserRequestDto,
        responses::{
            CreateUserResponse, DeleteUserResponse, EnvelopeDto, GetUserResponse,
            ListUsersResponse, UserEnvelopeDto, UsersEnvelopeDto,
        },
    },
};

pub const INVALID_USER_ID: &str = "Invalid user ID";
const USER_NOT_FOUND: &str = "User not found";
const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi(prefix_path = "/api")]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> ListUsersResponse {
        match self.state.list_users_usecase.execute().await {
            Ok(users) => ListUsersResponse::Ok(Json(UsersEnvelopeDto {
                success: true,
                message: "Users retrieved successfully".to_string(),
                data: users.iter().map(map_user).collect(),
            })),
            Err(err) => ListUsersResponse::InternalError(internal_error(err)),
        }
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<CreateUserRequestDto>) -> CreateUserResponse {
        let Json(request) = request;
        let payload = CreateUserRequest {
            name: request.name,
            email: request.email,
        };

        match self.state.create_user_usecase.execute(payload).await {
            Ok(user) => CreateUserResponse::Created(Json(UserEnvelopeDto::new(
                "User created successfully",
                map_user(&user),
            ))),
            Err(DomainError::Validation(message)) => {
                CreateUserResponse::BadRequest(Json(EnvelopeDto::failure(message)))
            }
            Err(err) => CreateUserResponse::InternalError(internal_error(err)),
        }
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> GetUserResponse {
        let result = match id.0.parse::<UserId>() {
            Ok(id) => self.state.get_user_usecase.execute(id).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(user) => GetUserResponse::Ok(Json(UserEnvelopeDto::new(
                "User retrieved successfully",
                map_user(&user),
            ))),
            Err(DomainError::InvalidIdentifier(_)) => {
                GetUserResponse::BadRequest(Json(EnvelopeDto::failure(INVALID_USER_ID)))
            }
            Err(DomainError::NotFound(_)) => {
                GetUserResponse::NotFound(Json(EnvelopeDto::failure(USER_NOT_FOUND)))
            }
            Err(err) => GetUserResponse::InternalError(internal_error(err)),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        let result = match id.0.parse::<UserId>() {
            Ok(id) => self.state.delete_user_usecase.execute(id).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                DeleteUserResponse::Ok(Json(EnvelopeDto::success("User deleted successfully")))
            }
            Err(DomainError::InvalidIdentifier(_)) => {
                DeleteUserResponse::BadRequest(Json(EnvelopeDto::failure(INVALID_USER_ID)))
            }
            Err(DomainError::NotFound(_)) => {
                DeleteUserResponse::NotFound(Json(EnvelopeDto::failure(USER_NOT_FOUND)))
            }
            Err(err) => DeleteUserResponse::InternalError(internal_error(err)),
        }
    }
}

fn internal_error(err: DomainError) -> Json<EnvelopeDto> {
    error!(error = %err, "user store operation failed");
    Json(EnvelopeDto::failure(INTERNAL_ERROR))
}
