//! Order workflow (application-level orchestration).
//!
//! `OrderService` composes a customer store, a product store and a log sink,
//! all injected through configuration steps (see [`config`]). It depends on the
//! store traits only, never on a concrete backend.
//!
//! ## Order Creation Flow
//!
//! ```text
//! create_order(customer_id, product_ids)
//!   ↓
//! 1. Load customer (NotFound propagates)
//!   ↓
//! 2. Load each product in request order (first NotFound propagates)
//!   ↓
//! 3. Sum unit prices (one unit per requested id)
//!   ↓
//! 4. Emit one log record
//!   ↓
//! 5. Return total
//! ```
//!
//! The workflow only reads from the stores, so a failure at any step leaves
//! both stores exactly as they were.

pub mod config;
pub mod error;

use std::sync::Arc;

use orderdesk_core::AggregateRoot;
use orderdesk_customers::CustomerId;
use orderdesk_products::ProductId;

use crate::order_log::{LogRecord, OrderLogger};
use crate::store::{CustomerStore, ProductStore};

pub use config::{
    DEFAULT_SERVICE_NAME, OrderConfiguration, OrderServiceBuilder, with_customer_store,
    with_in_memory_customer_store, with_in_memory_product_store, with_json_logger, with_logger,
    with_product_store, with_seeded_product_store, with_tracing_logger,
};
pub use error::OrderError;

/// Order-creation orchestrator.
///
/// Cheap to share: all collaborators sit behind `Arc`s and every operation
/// takes `&self`.
pub struct OrderService {
    customers: Arc<dyn CustomerStore>,
    products: Arc<dyn ProductStore>,
    logger: Arc<dyn OrderLogger>,
}

impl OrderService {
    /// Build a service by applying `steps` in order to an empty builder.
    pub fn new(steps: impl IntoIterator<Item = OrderConfiguration>) -> Result<Self, OrderError> {
        OrderServiceBuilder::new().apply_all(steps)?.build()
    }

    pub fn builder() -> OrderServiceBuilder {
        OrderServiceBuilder::new()
    }

    /// The customer store this service reads from.
    pub fn customers(&self) -> &dyn CustomerStore {
        self.customers.as_ref()
    }

    /// The product store this service reads from.
    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }

    /// Price an order of one unit per product id for the given customer.
    ///
    /// Returns the sum of the products' unit prices. Product quantities are not
    /// consulted. Duplicate ids are counted once per occurrence.
    pub fn create_order(
        &self,
        customer_id: &CustomerId,
        product_ids: &[ProductId],
    ) -> Result<f64, OrderError> {
        let customer = self.customers.get_one(customer_id)?;

        let mut total = 0.0;
        for id in product_ids {
            let product = self.products.get_one(id)?;
            total += product.price();
        }

        self.logger.log(&LogRecord::info(format!(
            "Customer {} ordered {} products",
            customer.id(),
            product_ids.len()
        )));

        Ok(total)
    }
}

impl core::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderService").finish_non_exhaustive()
    }
}
