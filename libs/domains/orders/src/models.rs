use chrono::{DateTime, Utc};
use domain_customers::Customer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// One line of a persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub product_id: String,
    pub quantity: u32,
    /// Unit price captured when the order was placed
    pub price: f64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: Uuid,
    /// Customer who placed the order
    pub customer: Customer,
    /// Ordered line items, in the order they were recorded
    pub products: Vec<OrderProduct>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input to [`crate::OrderRepository::create`]; already validated
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrder {
    pub customer: Customer,
    pub products: Vec<OrderProduct>,
}

/// A product and quantity asked for by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RequestedProduct {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Request accepted by [`crate::OrderService::create_order`]
///
/// Deriving `Validate` only checks `customer_id`. The product lines are
/// checked after the customer lookup, see [`RequestedProduct::validate_lines`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1))]
    pub customer_id: String,
    pub products: Vec<RequestedProduct>,
}

impl RequestedProduct {
    /// At least one line, each with a non-empty id and a positive quantity
    pub fn validate_lines(lines: &[RequestedProduct]) -> Result<(), ValidationErrors> {
        if lines.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.add("products", ValidationError::new("length"));
            return Err(errors);
        }
        lines.iter().try_for_each(|line| line.validate())
    }
}

impl Order {
    pub fn new(input: CreateOrder) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            customer: input.customer,
            products: input.products,
            created_at: now,
            updated_at: now,
        }
    }
}
