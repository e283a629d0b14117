use domain_customers::CustomerError;
use domain_products::ProductError;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Some ordered products do not exist (requested {requested}, found {found})")]
    ProductsNotFound { requested: usize, found: usize },

    #[error("Product {0} was returned by the store but is not part of the order")]
    ProductNotFoundInRequest(String),

    #[error("Product {name} has insufficient quantity. The available amount is: {available}")]
    InsufficientStock {
        product_id: String,
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Product {0} appears more than once in the order")]
    DuplicateProduct(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Classification of an [`OrderError`], stable across message changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OrderErrorKind {
    CustomerNotFound,
    ProductsNotFound,
    ProductNotFoundInRequest,
    InsufficientStock,
    DuplicateProduct,
    Validation,
    Store,
    Internal,
}

impl OrderError {
    pub fn kind(&self) -> OrderErrorKind {
        match self {
            OrderError::CustomerNotFound(_) => OrderErrorKind::CustomerNotFound,
            OrderError::ProductsNotFound { .. } => OrderErrorKind::ProductsNotFound,
            OrderError::ProductNotFoundInRequest(_) => OrderErrorKind::ProductNotFoundInRequest,
            OrderError::InsufficientStock { .. } => OrderErrorKind::InsufficientStock,
            OrderError::DuplicateProduct(_) => OrderErrorKind::DuplicateProduct,
            OrderError::Validation(_) => OrderErrorKind::Validation,
            OrderError::Customer(_) | OrderError::Product(_) => OrderErrorKind::Store,
            OrderError::Internal(_) => OrderErrorKind::Internal,
        }
    }

    /// True for expected rule violations, false for storage or internal failures
    pub fn is_business_rejection(&self) -> bool {
        !matches!(
            self.kind(),
            OrderErrorKind::Store | OrderErrorKind::Internal
        )
    }
}
