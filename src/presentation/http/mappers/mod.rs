use chrono::{DateTime, SecondsFormat, Utc};

use crate::{domain::models::User, presentation::http::responses::UserDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id.0,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: format_timestamp(&user.created_at),
    }
}

/// RFC 3339 with a `Z` suffix and only as many fractional digits as needed.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
