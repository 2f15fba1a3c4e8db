use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, IntoResponse, Request, Response, Route,
    error::{MethodNotAllowedError, NotFoundError},
    http::StatusCode,
    middleware::Tracing,
};
use poem_openapi::{OpenApiService, payload::Json};

use crate::presentation::http::{
    endpoints::{
        root::{ApiState, SystemEndpoints},
        users::{INVALID_USER_ID, UsersEndpoints},
    },
    responses::EnvelopeDto,
};

pub const API_TITLE: &str = "Users API";

/// Mounts the API at `/`, Swagger UI at `/docs` and the OpenAPI document at
/// `/openapi.json`. Router errors are answered with the JSON envelope.
/// Everything after `/api/users/` is treated as an id, so segments the router
/// cannot match (empty, or containing `/`) are rejected as invalid ids.
pub fn build_app(state: Arc<ApiState>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (SystemEndpoints, UsersEndpoints::new(state)),
        API_TITLE,
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .around(reject_unmatched_user_ids)
        .catch_error(method_not_allowed)
        .catch_error(not_found)
        .with(Tracing)
}

const USER_ITEM_PREFIX: &str = "/api/users/";

async fn reject_unmatched_user_ids(ep: Arc<Route>, req: Request) -> poem::Result<Response> {
    let under_user_item = req.uri().path().starts_with(USER_ITEM_PREFIX);

    match ep.call(req).await {
        Err(err) if under_user_item && err.is::<NotFoundError>() => {
            Ok(Json(EnvelopeDto::failure(INVALID_USER_ID))
                .with_status(StatusCode::BAD_REQUEST)
                .into_response())
        }
        result => result,
    }
}

async fn method_not_allowed(_: MethodNotAllowedError) -> Response {
    Json(EnvelopeDto::failure("Method not allowed"))
        .with_status(StatusCode::METHOD_NOT_ALLOWED)
        .into_response()
}

async fn not_found(_: NotFoundError) -> Response {
    Json(EnvelopeDto::failure("Not found"))
        .with_status(StatusCode::NOT_FOUND)
        .into_response()
}
