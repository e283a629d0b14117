use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{CreateCustomer, Customer};

/// Lookup contract for customers.
///
/// A miss is `Ok(None)`, never an error. Errors are reserved for storage
/// failures.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by identifier
    async fn find_by_id(&self, id: &str) -> CustomerResult<Option<Customer>>;

    /// Find a customer by email (exact match)
    async fn find_by_email(&self, email: &str) -> CustomerResult<Option<Customer>>;
}

/// In-memory implementation of CustomerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer, assigning a new identifier
    pub async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        input
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        let mut customers = self.customers.write().await;
        if customers.iter().any(|c| c.email == input.email) {
            return Err(CustomerError::DuplicateEmail(input.email));
        }

        let customer = Customer::new(input);
        customers.push(customer.clone());

        tracing::info!(customer_id = %customer.id, "Created customer");
        Ok(customer)
    }

    /// Store an already-built customer, replacing any entry with the same id
    pub async fn insert(&self, customer: Customer) {
        let mut customers = self.customers.write().await;
        customers.retain(|c| c.id != customer.id);
        tracing::debug!(customer_id = %customer.id, "Inserted customer");
        customers.push(customer);
    }

    /// Snapshot of every stored customer, in insertion order
    pub async fn all(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &str) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.email == email).cloned())
    }
}
