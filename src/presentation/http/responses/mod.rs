use poem_openapi::{ApiResponse, Object, payload::Json};
use tracing::debug;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON";

#[derive(Object, Debug)]
pub struct EnvelopeDto {
    pub success: bool,
    pub message: String,
}

impl EnvelopeDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Object, Debug)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Object, Debug)]
pub struct UserEnvelopeDto {
    pub success: bool,
    pub message: String,
    pub data: UserDto,
}

impl UserEnvelopeDto {
    pub fn new(message: impl Into<String>, data: UserDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[derive(Object, Debug)]
pub struct UsersEnvelopeDto {
    pub success: bool,
    pub message: String,
    pub data: Vec<UserDto>,
}

#[derive(Object, Debug)]
pub struct HealthDto {
    pub timestamp: String,
    pub status: String,
}

#[derive(Object, Debug)]
pub struct HealthEnvelopeDto {
    pub success: bool,
    pub message: String,
    pub data: HealthDto,
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    #[oai(status = 200)]
    Ok(Json<UsersEnvelopeDto>),
    #[oai(status = 500)]
    InternalError(Json<EnvelopeDto>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "invalid_payload")]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<EnvelopeDto>),
    #[oai(status = 500)]
    InternalError(Json<EnvelopeDto>),
}

/// Unparseable bodies and non-JSON content types still answer with the envelope.
fn invalid_payload(err: poem::Error) -> CreateUserResponse {
    debug!(error = %err, "rejected create user payload");
    CreateUserResponse::BadRequest(Json(EnvelopeDto::failure(INVALID_JSON_MESSAGE)))
}

#[derive(ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<EnvelopeDto>),
    #[oai(status = 404)]
    NotFound(Json<EnvelopeDto>),
    #[oai(status = 500)]
    InternalError(Json<EnvelopeDto>),
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 200)]
    Ok(Json<EnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<EnvelopeDto>),
    #[oai(status = 404)]
    NotFound(Json<EnvelopeDto>),
    #[oai(status = 500)]
    InternalError(Json<EnvelopeDto>),
}
