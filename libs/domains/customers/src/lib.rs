//! Customers Domain
//!
//! Read access to registered customers for the order workflow.
//!
//! Customers are created by a registration flow that lives elsewhere; this
//! crate only exposes the lookup contract ([`CustomerRepository`]) and an
//! in-memory implementation used in tests and local development.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_customers::{CreateCustomer, CustomerRepository, InMemoryCustomerRepository};
//!
//! # async fn example() -> domain_customers::CustomerResult<()> {
//! let repository = InMemoryCustomerRepository::new();
//! let customer = repository
//!     .create(CreateCustomer {
//!         name: "Ada Lovelace".to_string(),
//!         email: "ada@example.com".to_string(),
//!     })
//!     .await?;
//!
//! let found = repository.find_by_email("ada@example.com").await?;
//! assert_eq!(found.map(|c| c.id), Some(customer.id));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod repository;

pub use error::{CustomerError, CustomerResult};
pub use models::{CreateCustomer, Customer};
pub use repository::{CustomerRepository, InMemoryCustomerRepository};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockCustomerRepository;
