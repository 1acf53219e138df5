//! Demo wiring for the `orderdesk` binary.

use anyhow::Context;

use orderdesk_core::AggregateRoot;
use orderdesk_customers::Customer;
use orderdesk_infra::order_service::{
    DEFAULT_SERVICE_NAME, OrderService, with_in_memory_customer_store,
    with_in_memory_product_store, with_tracing_logger,
};
use orderdesk_products::Product;

/// Environment variable naming the service in order log records.
pub const SERVICE_NAME_ENV: &str = "ORDERDESK_SERVICE_NAME";

/// Environment variable naming the demo customer.
pub const CUSTOMER_NAME_ENV: &str = "ORDERDESK_CUSTOMER_NAME";

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub service_name: String,
    pub customer_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            customer_name: "John".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: std::env::var(SERVICE_NAME_ENV).unwrap_or(defaults.service_name),
            customer_name: std::env::var(CUSTOMER_NAME_ENV).unwrap_or(defaults.customer_name),
        }
    }
}

/// Products every demo service starts with.
pub fn demo_catalog() -> anyhow::Result<Vec<Product>> {
    Ok(vec![
        Product::new("beer", "Tasty", 12.45)?,
        Product::new("wine", "Ruby", 24.45)?,
        Product::new("shoes", "Comfy", 122.45)?,
    ])
}

/// Build an in-memory service, register one customer and order the whole
/// catalog once. Returns the order total.
pub fn run(config: &AppConfig) -> anyhow::Result<f64> {
    let customer = Customer::new(config.customer_name.as_str()).context("creating customer")?;
    tracing::info!(customer_id = %customer.id(), name = customer.name(), "customer created");

    let catalog = demo_catalog()?;
    let product_ids: Vec<_> = catalog.iter().map(|p| p.id()).collect();

    let service = OrderService::new([
        with_in_memory_customer_store(),
        with_in_memory_product_store(catalog),
        with_tracing_logger(config.service_name.clone()),
    ])
    .context("configuring order service")?;

    service
        .customers()
        .add(customer.clone())
        .context("registering customer")?;

    let total = service
        .create_order(&customer.id(), &product_ids)
        .context("creating order")?;

    Ok(total)
}
