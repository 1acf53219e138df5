//! Composable configuration steps for `OrderService`.
//!
//! A step is a boxed transformation of the (not yet visible) builder. Steps run
//! in the order given and the first failing step aborts construction:
//!
//! ```ignore
//! let service = OrderService::new([
//!     with_in_memory_customer_store(),
//!     with_in_memory_product_store(products),
//!     with_tracing_logger("orders"),
//! ])?;
//! ```
//!
//! Swapping a backend means swapping one step, e.g. `with_customer_store(pg)`
//! instead of `with_in_memory_customer_store()`; the workflow itself only sees
//! the store traits.

use std::io::Write;
use std::sync::Arc;

use orderdesk_products::Product;

use crate::order_log::{JsonOrderLogger, OrderLogger, TracingOrderLogger};
use crate::store::{CustomerStore, InMemoryCustomerStore, InMemoryProductStore, ProductStore};

use super::OrderService;
use super::error::OrderError;

/// Service name used when no logger step was applied.
pub const DEFAULT_SERVICE_NAME: &str = "orders";

/// One configuration step.
pub type OrderConfiguration =
    Box<dyn FnOnce(OrderServiceBuilder) -> Result<OrderServiceBuilder, OrderError> + Send>;

/// Zero-valued service under construction.
#[derive(Default)]
pub struct OrderServiceBuilder {
    customers: Option<Arc<dyn CustomerStore>>,
    products: Option<Arc<dyn ProductStore>>,
    logger: Option<Arc<dyn OrderLogger>>,
}

impl OrderServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the customer store. Later calls win.
    pub fn customer_store(mut self, store: Arc<dyn CustomerStore>) -> Self {
        self.customers = Some(store);
        self
    }

    pub fn product_store(mut self, store: Arc<dyn ProductStore>) -> Self {
        self.products = Some(store);
        self
    }

    pub fn logger(mut self, logger: Arc<dyn OrderLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Apply one step.
    pub fn apply(self, step: OrderConfiguration) -> Result<Self, OrderError> {
        step(self)
    }

    /// Apply steps left to right, stopping at the first error.
    pub fn apply_all(
        self,
        steps: impl IntoIterator<Item = OrderConfiguration>,
    ) -> Result<Self, OrderError> {
        steps.into_iter().try_fold(self, |builder, step| builder.apply(step))
    }

    /// Finish construction. Both stores are required; the logger defaults to
    /// a `TracingOrderLogger` named [`DEFAULT_SERVICE_NAME`].
    pub fn build(self) -> Result<OrderService, OrderError> {
        let customers = self
            .customers
            .ok_or_else(|| OrderError::configuration("build", "no customer store configured"))?;
        let products = self
            .products
            .ok_or_else(|| OrderError::configuration("build", "no product store configured"))?;
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingOrderLogger::new(DEFAULT_SERVICE_NAME)));

        Ok(OrderService {
            customers,
            products,
            logger,
        })
    }
}

/// Attach any customer store implementation.
pub fn with_customer_store<S>(store: S) -> OrderConfiguration
where
    S: CustomerStore + 'static,
{
    Box::new(move |builder: OrderServiceBuilder| Ok(builder.customer_store(Arc::new(store))))
}

/// Attach any product store implementation.
pub fn with_product_store<S>(store: S) -> OrderConfiguration
where
    S: ProductStore + 'static,
{
    Box::new(move |builder: OrderServiceBuilder| Ok(builder.product_store(Arc::new(store))))
}

/// Attach any logger.
pub fn with_logger<L>(logger: L) -> OrderConfiguration
where
    L: OrderLogger + 'static,
{
    Box::new(move |builder: OrderServiceBuilder| Ok(builder.logger(Arc::new(logger))))
}

/// Attach a fresh, empty in-memory customer store.
pub fn with_in_memory_customer_store() -> OrderConfiguration {
    with_customer_store(InMemoryCustomerStore::new())
}

/// Seed `store` with `products` and attach it.
///
/// Seeding stops at the first product the store refuses; the step then fails
/// with `OrderError::Configuration` and the service is not built.
pub fn with_seeded_product_store<S>(
    store: S,
    products: impl IntoIterator<Item = Product>,
) -> OrderConfiguration
where
    S: ProductStore + 'static,
{
    let products: Vec<Product> = products.into_iter().collect();

    Box::new(move |builder: OrderServiceBuilder| {
        let count = products.len();
        for product in products {
            let id = product.id_typed();
            store.add(product).map_err(|err| {
                OrderError::configuration("seed product store", format!("product {id}: {err}"))
            })?;
        }
        tracing::debug!(count, "seeded product store");

        Ok(builder.product_store(Arc::new(store)))
    })
}

/// Attach a new in-memory product store pre-populated with `products`.
pub fn with_in_memory_product_store(products: impl IntoIterator<Item = Product>) -> OrderConfiguration {
    with_seeded_product_store(InMemoryProductStore::new(), products)
}

/// Log through `tracing`, tagging records with `service_name`.
pub fn with_tracing_logger(service_name: impl Into<String>) -> OrderConfiguration {
    with_logger(TracingOrderLogger::new(service_name))
}

/// Log pretty JSON records to `writer`, prefixed with `"<service_name> :: "`.
pub fn with_json_logger<W>(service_name: impl Into<String>, writer: W) -> OrderConfiguration
where
    W: Write + Send + 'static,
{
    with_logger(JsonOrderLogger::new(service_name, writer))
}
