use chrono::Utc;
use poem_openapi::{
    OpenApi,
    payload::{Html, Json},
};

use crate::presentation::http::{
    endpoints::root::{EndpointsTags, SystemEndpoints},
    mappers::format_timestamp,
    responses::{HealthDto, HealthEnvelopeDto},
};

const HOME_PAGE: &str = include_str!("home.html");

#[OpenApi]
impl SystemEndpoints {
    /// Human-readable overview of the API with curl examples.
    #[oai(path = "/", method = "get", tag = EndpointsTags::System)]
    pub async fn home(&self) -> Html<&'static str> {
        Html(HOME_PAGE)
    }

    #[oai(path = "/health", method = "get", tag = EndpointsTags::System)]
    pub async fn health(&self) -> Json<HealthEnvelopeDto> {
        Json(HealthEnvelopeDto {
            success: true,
            message: "Service is healthy".to_string(),
            data: HealthDto {
                timestamp: format_timestamp(&Utc::now()),
                status: "ok".to_string(),
            },
        })
    }
}
