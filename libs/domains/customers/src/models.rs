use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A registered customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email (unique across customers)
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a customer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomer {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

impl Customer {
    /// Build a customer with a fresh UUIDv7 identifier
    pub fn new(input: CreateCustomer) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), input.name, input.email)
    }

    /// Build a customer with a caller-chosen identifier (fixtures, imports)
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
