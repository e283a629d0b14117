//! Order Service - the order creation workflow

use std::sync::Arc;

use core_config::orders::{DuplicateProductPolicy, OrderConfig};
use domain_customers::CustomerRepository;
use domain_products::{ProductRepository, UpdateProductQuantity};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, CreateOrderRequest, Order, OrderProduct, RequestedProduct};
use crate::repository::OrderRepository;

/// Creates orders against the customer, product and order stores.
///
/// Every check runs before the first write. Once validation passes the service
/// issues exactly two writes: one bulk stock update, then the order insert.
/// The two writes are not atomic; if the insert fails the stock stays
/// decremented and the failure is logged with the affected products.
pub struct OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    customers: Arc<C>,
    products: Arc<P>,
    orders: Arc<O>,
    config: OrderConfig,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    /// Create a new OrderService with the default [`OrderConfig`]
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self::with_config(customers, products, orders, OrderConfig::default())
    }

    pub fn with_config(customers: C, products: P, orders: O, config: OrderConfig) -> Self {
        Self {
            customers: Arc::new(customers),
            products: Arc::new(products),
            orders: Arc::new(orders),
            config,
        }
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    /// Validate the request, decrement stock and persist the order.
    ///
    /// Gates, in order: customer id present, customer exists, line shape,
    /// duplicate lines, every product exists, every line fits in stock.
    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn create_order(&self, request: CreateOrderRequest) -> OrderResult<Order> {
        request
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let CreateOrderRequest {
            customer_id,
            products: requested,
        } = request;

        let customer = self
            .customers
            .find_by_id(&customer_id)
            .await?
            .ok_or_else(|| {
                warn!("Customer not found");
                OrderError::CustomerNotFound(customer_id.clone())
            })?;

        RequestedProduct::validate_lines(&requested)
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let requested = collapse_duplicates(requested, self.config.duplicate_products)?;

        let ids: Vec<String> = requested.iter().map(|line| line.id.clone()).collect();
        let found = self.products.find_all_by_id(ids).await?;

        if found.len() != requested.len() {
            warn!(
                requested = requested.len(),
                found = found.len(),
                "Ordered products missing from catalogue"
            );
            return Err(OrderError::ProductsNotFound {
                requested: requested.len(),
                found: found.len(),
            });
        }

        let mut ordered = Vec::with_capacity(found.len());
        let mut updates = Vec::with_capacity(found.len());

        for product in &found {
            let line = requested
                .iter()
                .find(|line| line.id == product.id)
                .ok_or_else(|| OrderError::ProductNotFoundInRequest(product.id.clone()))?;

            ordered.push(OrderProduct {
                product_id: line.id.clone(),
                quantity: line.quantity,
                price: product.price,
            });

            if product.quantity < line.quantity {
                warn!(
                    product_id = %product.id,
                    requested = line.quantity,
                    available = product.quantity,
                    "Insufficient stock"
                );
                return Err(OrderError::InsufficientStock {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    requested: line.quantity,
                    available: product.quantity,
                });
            }

            updates.push(UpdateProductQuantity {
                id: product.id.clone(),
                quantity: product.quantity - line.quantity,
            });
        }

        self.products.update_quantity(updates).await?;

        let order = self
            .orders
            .create(CreateOrder {
                customer,
                products: ordered,
            })
            .await
            .inspect_err(|e| {
                let product_ids: Vec<&str> = requested.iter().map(|l| l.id.as_str()).collect();
                error!(
                    error = %e,
                    ?product_ids,
                    "Order insert failed after stock was decremented"
                );
            })?;

        info!(order_id = %order.id, lines = order.products.len(), "Order created");
        Ok(order)
    }
}

impl<C, P, O> Clone for OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    fn clone(&self) -> Self {
        Self {
            customers: Arc::clone(&self.customers),
            products: Arc::clone(&self.products),
            orders: Arc::clone(&self.orders),
            config: self.config.clone(),
        }
    }
}

/// Apply the duplicate-line policy, returning one line per product id
fn collapse_duplicates(
    lines: Vec<RequestedProduct>,
    policy: DuplicateProductPolicy,
) -> OrderResult<Vec<RequestedProduct>> {
    let mut distinct: Vec<RequestedProduct> = Vec::with_capacity(lines.len());

    for line in lines {
        let Some(existing) = distinct.iter_mut().find(|d| d.id == line.id) else {
            distinct.push(line);
            continue;
        };

        match policy {
            DuplicateProductPolicy::Reject => {
                warn!(product_id = %line.id, "Duplicate product in order");
                return Err(OrderError::DuplicateProduct(line.id));
            }
            DuplicateProductPolicy::Merge => {
                existing.quantity = existing
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or_else(|| {
                        OrderError::Validation(format!("quantity overflow for product {}", line.id))
                    })?;
            }
        }
    }

    Ok(distinct)
}
