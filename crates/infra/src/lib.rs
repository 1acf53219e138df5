//! Infrastructure layer: repositories, log sinks and the order workflow.

pub mod order_log;
pub mod order_service;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use order_log::{JsonOrderLogger, LogRecord, MemoryOrderLogger, OrderLogger, TracingOrderLogger};
pub use order_service::{OrderConfiguration, OrderError, OrderService, OrderServiceBuilder};
pub use store::{
    CustomerStore, InMemoryCustomerStore, InMemoryProductStore, ProductStore, StoreError,
};
