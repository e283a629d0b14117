use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProductQuantity};

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends; the order workflow
/// only relies on the two bulk operations below.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product whose id is in `ids`.
    ///
    /// Returns at most one row per distinct id. Unknown ids are skipped, not
    /// reported; callers compare counts.
    async fn find_all_by_id(&self, ids: Vec<String>) -> ProductResult<Vec<Product>>;

    /// Set the stock quantity of each listed product, returning the updated rows
    async fn update_quantity(
        &self,
        updates: Vec<UpdateProductQuantity>,
    ) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the catalogue with a generated id
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = Product::new(input);
        self.products.write().await.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    /// Store an already-built product, replacing any entry with the same id
    pub async fn insert(&self, product: Product) {
        let mut products = self.products.write().await;
        products.retain(|p| p.id != product.id);
        products.push(product);
    }

    /// Look up a single product
    pub async fn get(&self, id: &str) -> Option<Product> {
        let products = self.products.read().await;
        products.iter().find(|p| p.id == id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all_by_id(&self, ids: Vec<String>) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut seen = HashSet::with_capacity(ids.len());
        let found: Vec<Product> = ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| products.iter().find(|p| &p.id == id).cloned())
            .collect();

        tracing::debug!(requested = ids.len(), found = found.len(), "Fetched products");
        Ok(found)
    }

    async fn update_quantity(
        &self,
        updates: Vec<UpdateProductQuantity>,
    ) -> ProductResult<Vec<Product>> {
        let mut products = self.products.write().await;

        // Reject the whole batch before touching any row
        if let Some(missing) = updates
            .iter()
            .find(|u| !products.iter().any(|p| p.id == u.id))
        {
            return Err(ProductError::NotFound(missing.id.clone()));
        }

        let mut updated = Vec::with_capacity(updates.len());
        for update in updates {
            if let Some(product) = products.iter_mut().find(|p| p.id == update.id) {
                product.set_quantity(update.quantity);
                tracing::info!(
                    product_id = %product.id,
                    quantity = product.quantity,
                    "Updated product quantity"
                );
                updated.push(product.clone());
            }
        }

        Ok(updated)
    }
}
