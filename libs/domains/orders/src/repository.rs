use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order};

/// Repository trait for Order persistence
///
/// Orders are write-once: there is no update or delete.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and return it with its assigned id
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    /// Get an order by ID
    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<Order>>;
}

/// In-memory implementation of OrderRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);
        self.orders.write().await.push(order.clone());

        tracing::info!(order_id = %order.id, customer_id = %order.customer.id, "Created order");
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }
}
