use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: String,
    /// Product name, shown to customers in stock errors
    pub name: String,
    /// Current unit price
    pub price: f64,
    /// Stock on hand
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for adding a product to the catalogue
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub quantity: u32,
}

/// New absolute stock level for one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductQuantity {
    pub id: String,
    pub quantity: u32,
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self::with_id(
            Uuid::now_v7().to_string(),
            input.name,
            input.price,
            input.quantity,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the stock level
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }
}
