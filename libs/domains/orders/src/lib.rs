//! Orders Domain
//!
//! Order persistence and the order creation workflow.
//!
//! # Architecture
//!
//! ```text
//!              ┌──────────────┐
//!              │ OrderService │  ← validation gates, stock decrement
//!              └──────┬───────┘
//!        ┌────────────┼──────────────┐
//! ┌──────▼──────┐ ┌───▼─────────┐ ┌──▼──────────┐
//! │  Customer   │ │  Product    │ │   Order     │
//! │ Repository  │ │ Repository  │ │ Repository  │
//! └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_customers::{Customer, InMemoryCustomerRepository};
//! use domain_orders::{CreateOrderRequest, InMemoryOrderRepository, OrderService, RequestedProduct};
//! use domain_products::{InMemoryProductRepository, Product};
//!
//! # async fn example() -> domain_orders::OrderResult<()> {
//! let customers = InMemoryCustomerRepository::new();
//! customers.insert(Customer::with_id("C1", "Ada", "ada@example.com")).await;
//!
//! let products = InMemoryProductRepository::new();
//! products.insert(Product::with_id("P1", "Keyboard", 5.0, 10)).await;
//!
//! let service = OrderService::new(customers, products, InMemoryOrderRepository::new());
//! let order = service
//!     .create_order(CreateOrderRequest {
//!         customer_id: "C1".to_string(),
//!         products: vec![RequestedProduct { id: "P1".to_string(), quantity: 3 }],
//!     })
//!     .await?;
//! assert_eq!(order.products.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{OrderError, OrderErrorKind, OrderResult};
pub use models::{CreateOrder, CreateOrderRequest, Order, OrderProduct, RequestedProduct};
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::OrderService;

#[cfg(any(test, feature = "mock"))]
pub use repository::MockOrderRepository;
