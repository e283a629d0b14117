use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Customer with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;
