//! Order creation workflow tests
//!
//! These tests wire the service to the in-memory stores and check the
//! observable state of every store after each call:
//! - Successful orders decrement stock and snapshot prices
//! - Every rejection leaves customers, stock and orders untouched

use core_config::{
    orders::{DuplicateProductPolicy, OrderConfig},
    tracing::init_tracing,
    Environment,
};
use domain_customers::{Customer, InMemoryCustomerRepository};
use domain_orders::*;
use domain_products::{InMemoryProductRepository, Product, ProductRepository};

struct Shop {
    customer: Customer,
    customers: InMemoryCustomerRepository,
    products: InMemoryProductRepository,
    orders: InMemoryOrderRepository,
    service: OrderService<
        InMemoryCustomerRepository,
        InMemoryProductRepository,
        InMemoryOrderRepository,
    >,
}

impl Shop {
    async fn new() -> Self {
        Self::with_config(OrderConfig::default()).await
    }

    async fn with_config(config: OrderConfig) -> Self {
        init_tracing(&Environment::Development);

        let customer = Customer::with_id("C1", "Ada Lovelace", "ada@example.com");
        let customers = InMemoryCustomerRepository::new();
        customers.insert(customer.clone()).await;

        let products = InMemoryProductRepository::new();
        products
            .insert(Product::with_id("P1", "Mechanical Keyboard", 5.0, 10))
            .await;
        products
            .insert(Product::with_id("P2", "Wireless Mouse", 12.5, 2))
            .await;

        let orders = InMemoryOrderRepository::new();
        let service = OrderService::with_config(
            customers.clone(),
            products.clone(),
            orders.clone(),
            config,
        );

        Self {
            customer,
            customers,
            products,
            orders,
            service,
        }
    }

    async fn stock(&self, id: &str) -> u32 {
        self.products
            .get(id)
            .await
            .map(|p| p.quantity)
            .expect("product should exist")
    }

    async fn assert_untouched(&self) {
        assert_eq!(self.stock("P1").await, 10, "P1 stock must not change");
        assert_eq!(self.stock("P2").await, 2, "P2 stock must not change");
        assert_eq!(self.orders.count().await, 0, "no order must be stored");
        assert_eq!(
            self.customers.all().await,
            vec![self.customer.clone()],
            "customer must not change"
        );
    }
}

fn request(customer_id: &str, lines: &[(&str, u32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: customer_id.to_string(),
        products: lines
            .iter()
            .map(|(id, quantity)| RequestedProduct {
                id: id.to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}

// ============================================================================
// Successful orders
// ============================================================================

#[tokio::test]
async fn test_single_line_order_decrements_stock() {
    let shop = Shop::new().await;

    let order = shop
        .service
        .create_order(request("C1", &[("P1", 3)]))
        .await
        .unwrap();

    assert_eq!(order.customer.id, "C1");
    assert_eq!(
        order.products,
        vec![OrderProduct {
            product_id: "P1".to_string(),
            quantity: 3,
            price: 5.0,
        }]
    );
    assert_eq!(shop.stock("P1").await, 7);

    let stored = shop.orders.find_by_id(order.id).await.unwrap();
    assert_eq!(stored, Some(order));
}

#[tokio::test]
async fn test_multi_line_order_mirrors_request() {
    let shop = Shop::new().await;

    let order = shop
        .service
        .create_order(request("C1", &[("P2", 2), ("P1", 10)]))
        .await
        .unwrap();

    let lines: Vec<(&str, u32, f64)> = order
        .products
        .iter()
        .map(|l| (l.product_id.as_str(), l.quantity, l.price))
        .collect();
    assert_eq!(lines, vec![("P2", 2, 12.5), ("P1", 10, 5.0)]);

    // Draining stock to exactly zero is allowed
    assert_eq!(shop.stock("P1").await, 0);
    assert_eq!(shop.stock("P2").await, 0);
}

#[tokio::test]
async fn test_order_price_is_not_affected_by_later_price_change() {
    let shop = Shop::new().await;

    let order = shop
        .service
        .create_order(request("C1", &[("P1", 1)]))
        .await
        .unwrap();

    let mut repriced = shop.products.get("P1").await.unwrap();
    repriced.price = 99.0;
    shop.products.insert(repriced).await;

    let stored = shop.orders.find_by_id(order.id).await.unwrap().unwrap();
    assert_eq!(stored.products[0].price, 5.0);
}

#[tokio::test]
async fn test_consecutive_orders_consume_stock() {
    let shop = Shop::new().await;

    shop.service
        .create_order(request("C1", &[("P1", 6)]))
        .await
        .unwrap();

    let err = shop
        .service
        .create_order(request("C1", &[("P1", 6)]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), OrderErrorKind::InsufficientStock);
    assert!(err.to_string().contains("available amount is: 4"));
    assert_eq!(shop.stock("P1").await, 4);
    assert_eq!(shop.orders.count().await, 1);
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_unknown_customer() {
    let shop = Shop::new().await;

    let err = shop
        .service
        .create_order(request("C404", &[("P1", 1)]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), OrderErrorKind::CustomerNotFound);
    shop.assert_untouched().await;
}

#[tokio::test]
async fn test_unknown_customer_wins_over_invalid_lines() {
    let shop = Shop::new().await;

    let cases: [&[(&str, u32)]; 2] = [&[("P1", 0)], &[]];
    for lines in cases {
        let err = shop
            .service
            .create_order(request("C404", lines))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), OrderErrorKind::CustomerNotFound);
    }
    shop.assert_untouched().await;
}

#[tokio::test]
async fn test_unknown_product() {
    let shop = Shop::new().await;

    let err = shop
        .service
        .create_order(request("C1", &[("P1", 1), ("P404", 1)]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), OrderErrorKind::ProductsNotFound);
    shop.assert_untouched().await;
}

#[tokio::test]
async fn test_insufficient_stock_reports_name_and_available_amount() {
    let shop = Shop::new().await;

    let err = shop
        .service
        .create_order(request("C1", &[("P1", 15)]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), OrderErrorKind::InsufficientStock);
    let message = err.to_string();
    assert!(message.contains("Mechanical Keyboard"), "got: {message}");
    assert!(message.contains("10"), "got: {message}");
    shop.assert_untouched().await;
}

#[tokio::test]
async fn test_insufficient_stock_on_last_line_leaves_earlier_lines_untouched() {
    let shop = Shop::new().await;

    let err = shop
        .service
        .create_order(request("C1", &[("P1", 1), ("P2", 3)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrderError::InsufficientStock { ref product_id, available: 2, .. } if product_id == "P2"
    ));
    shop.assert_untouched().await;
}

#[tokio::test]
async fn test_invalid_request_shape() {
    let shop = Shop::new().await;

    for bad in [
        request("C1", &[]),
        request("C1", &[("P1", 0)]),
        request("", &[("P1", 1)]),
        request("C1", &[("", 1)]),
    ] {
        let err = shop.service.create_order(bad).await.unwrap_err();
        assert_eq!(err.kind(), OrderErrorKind::Validation);
    }
    shop.assert_untouched().await;
}

// ============================================================================
// Duplicate product lines
// ============================================================================

#[tokio::test]
async fn test_duplicate_lines_rejected_by_default() {
    let shop = Shop::new().await;

    let err = shop
        .service
        .create_order(request("C1", &[("P1", 1), ("P1", 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::DuplicateProduct(ref id) if id == "P1"));
    shop.assert_untouched().await;
}

#[tokio::test]
async fn test_duplicate_lines_merged() {
    let shop = Shop::with_config(OrderConfig::new(DuplicateProductPolicy::Merge)).await;

    let order = shop
        .service
        .create_order(request("C1", &[("P1", 4), ("P2", 1), ("P1", 5)]))
        .await
        .unwrap();

    assert_eq!(order.products.len(), 2);
    assert_eq!(order.products[0].product_id, "P1");
    assert_eq!(order.products[0].quantity, 9);
    assert_eq!(shop.stock("P1").await, 1);
    assert_eq!(shop.stock("P2").await, 1);
}

#[tokio::test]
async fn test_merged_quantity_is_stock_checked() {
    let shop = Shop::with_config(OrderConfig::new(DuplicateProductPolicy::Merge)).await;

    let err = shop
        .service
        .create_order(request("C1", &[("P2", 2), ("P2", 1)]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), OrderErrorKind::InsufficientStock);
    shop.assert_untouched().await;
}

// ============================================================================
// Composition
// ============================================================================

#[tokio::test]
async fn test_cloned_service_shares_stores() {
    let shop = Shop::new().await;
    let clone = shop.service.clone();

    clone
        .create_order(request("C1", &[("P2", 1)]))
        .await
        .unwrap();

    assert_eq!(shop.stock("P2").await, 1);
    assert_eq!(shop.orders.count().await, 1);
    assert_eq!(clone.config().duplicate_products, DuplicateProductPolicy::Reject);
}

#[tokio::test]
async fn test_products_visible_through_trait_after_order() {
    let shop = Shop::new().await;

    shop.service
        .create_order(request("C1", &[("P1", 2)]))
        .await
        .unwrap();

    let products = shop
        .products
        .find_all_by_id(vec!["P1".to_string()])
        .await
        .unwrap();
    assert_eq!(products[0].quantity, 8);
}
