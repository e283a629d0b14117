//! Products Domain
//!
//! Catalogue and stock access for the order workflow: bulk lookup by id and
//! bulk stock-quantity updates.
//!
//! ```text
//! ┌──────────────────────┐
//! │  ProductRepository   │  ← find_all_by_id / update_quantity
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │  InMemory / backend  │  ← any storage engine behind the trait
//! └──────────────────────┘
//! ```

pub mod error;
pub mod models;
pub mod repository;

pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, Product, UpdateProductQuantity};
pub use repository::{InMemoryProductRepository, ProductRepository};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockProductRepository;
