use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, value_objects::UserId};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and email are required";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. Construction enforces that both fields are present,
/// so a store never receives an empty name or email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() || email.is_empty() {
            return Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            created_at,
        }
    }
}
