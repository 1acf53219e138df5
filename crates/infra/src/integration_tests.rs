//! Integration tests for the order workflow across stores and log sinks.
//!
//! Verifies:
//! - Configuration steps compose and fail fast
//! - Any backend implementing the store traits can be plugged in
//! - Failed orders leave the stores untouched
//! - The service is safe to share across threads

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::thread;

    use orderdesk_core::{AggregateRoot, EntityId};
    use orderdesk_customers::{Customer, CustomerId};
    use orderdesk_products::{Product, ProductId};

    use crate::order_service::{
        OrderConfiguration, OrderError, OrderService, OrderServiceBuilder, with_customer_store,
        with_in_memory_customer_store, with_in_memory_product_store, with_json_logger,
        with_logger, with_product_store, with_seeded_product_store, with_tracing_logger,
    };
    use crate::order_log::MemoryOrderLogger;
    use crate::store::{
        CustomerStore, InMemoryCustomerStore, InMemoryProductStore, ProductStore, StoreError,
    };

    fn init_products() -> Vec<Product> {
        vec![
            Product::new("beer", "Tasty", 12.45).unwrap(),
            Product::new("wine", "Ruby", 24.45).unwrap(),
            Product::new("shoes", "Comfy", 122.45).unwrap(),
        ]
    }

    /// Shared in-memory writer so tests can read what a JSON logger wrote.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Product backend that refuses every write.
    struct RejectingProductStore {
        attempts: AtomicUsize,
    }

    impl ProductStore for RejectingProductStore {
        fn get_one(&self, id: &ProductId) -> Result<Product, StoreError> {
            Err(StoreError::not_found::<Product>(*id))
        }

        fn get_all(&self) -> Result<Vec<Product>, StoreError> {
            Ok(vec![])
        }

        fn add(&self, _product: Product) -> Result<(), StoreError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::unavailable("read-only replica"))
        }

        fn update(&self, _product: Product) -> Result<(), StoreError> {
            Err(StoreError::unavailable("read-only replica"))
        }

        fn delete(&self, _id: &ProductId) -> Result<(), StoreError> {
            Err(StoreError::unavailable("read-only replica"))
        }
    }

    /// Customer backend that delegates to memory and counts lookups.
    #[derive(Default)]
    struct CountingCustomerStore {
        inner: InMemoryCustomerStore,
        lookups: AtomicUsize,
    }

    impl CustomerStore for CountingCustomerStore {
        fn get_one(&self, id: &CustomerId) -> Result<Customer, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.get_one(id)
        }

        fn add(&self, customer: Customer) -> Result<(), StoreError> {
            self.inner.add(customer)
        }

        fn update(&self, customer: Customer) -> Result<(), StoreError> {
            self.inner.update(customer)
        }
    }

    #[test]
    fn order_happy_path_writes_json_record() {
        let products = init_products();
        let buffer = SharedBuffer::default();
        let service = OrderService::new([
            with_in_memory_customer_store(),
            with_in_memory_product_store(products.clone()),
            with_json_logger("LOGGER", buffer.clone()),
        ])
        .unwrap();

        let customer = Customer::new("Joseph").unwrap();
        service.customers().add(customer.clone()).unwrap();

        let total = service
            .create_order(&customer.id(), &[products[0].id()])
            .unwrap();
        assert_eq!(total, 12.45);

        let output = buffer.contents();
        let json = output
            .strip_prefix("LOGGER :: ")
            .expect("record should carry the service prefix");
        let record: serde_json::Value = serde_json::from_str(json.trim_end()).unwrap();
        assert_eq!(record["level"], "INFO");
        assert_eq!(
            record["msg"],
            format!("Customer {} ordered 1 products", customer.id())
        );
        assert!(record["time"].is_string());
    }

    #[test]
    fn order_with_unknown_product_returns_not_found_and_writes_nothing() {
        let products = init_products();
        let buffer = SharedBuffer::default();
        let service = OrderService::new([
            with_in_memory_customer_store(),
            with_in_memory_product_store(products),
            with_json_logger("LOGGER", buffer.clone()),
        ])
        .unwrap();
        let customer = Customer::new("Joseph").unwrap();
        service.customers().add(customer.clone()).unwrap();

        let result = service.create_order(&customer.id(), &[ProductId::new(EntityId::new())]);

        assert!(result.unwrap_err().is_not_found());
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn seeding_failure_aborts_construction_and_skips_later_steps() {
        let store = Arc::new(RejectingProductStore {
            attempts: AtomicUsize::new(0),
        });
        let later_step_ran = Arc::new(AtomicBool::new(false));
        let flag = later_step_ran.clone();
        let later: OrderConfiguration = Box::new(move |builder: OrderServiceBuilder| {
            flag.store(true, Ordering::SeqCst);
            Ok(builder)
        });

        let err = OrderService::new([
            with_in_memory_customer_store(),
            with_seeded_product_store(store.clone(), init_products()),
            later,
        ])
        .unwrap_err();

        match err {
            OrderError::Configuration { step, reason } => {
                assert_eq!(step, "seed product store");
                assert!(reason.contains("read-only replica"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
        // Seeding stopped at the first refused product.
        assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
        assert!(!later_step_ran.load(Ordering::SeqCst));
    }

    #[test]
    fn custom_backends_are_interchangeable() {
        let customers = Arc::new(CountingCustomerStore::default());
        let products = Arc::new(InMemoryProductStore::new());
        let catalog = init_products();
        for p in &catalog {
            products.add(p.clone()).unwrap();
        }

        let service = OrderService::new([
            with_customer_store(customers.clone()),
            with_product_store(products.clone()),
            with_tracing_logger("orders-test"),
        ])
        .unwrap();

        let customer = Customer::new("Percy").unwrap();
        customers.add(customer.clone()).unwrap();

        let total = service
            .create_order(&customer.id(), &[catalog[1].id(), catalog[2].id()])
            .unwrap();

        assert!((total - 146.9).abs() < 1e-9);
        assert_eq!(customers.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_order_leaves_stores_unmodified() {
        let catalog = init_products();
        let customers = Arc::new(InMemoryCustomerStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        let service = OrderService::new([
            with_customer_store(customers.clone()),
            with_seeded_product_store(products.clone(), catalog.clone()),
            with_logger(MemoryOrderLogger::new()),
        ])
        .unwrap();

        let customer = Customer::new("Joseph").unwrap();
        customers.add(customer.clone()).unwrap();
        let mut before = products.get_all().unwrap();

        let err = service
            .create_order(
                &customer.id(),
                &[catalog[0].id(), ProductId::new(EntityId::new())],
            )
            .unwrap_err();
        assert!(err.is_not_found());

        let mut after = products.get_all().unwrap();
        let by_id = |p: &Product| p.id().to_string();
        before.sort_by_key(by_id);
        after.sort_by_key(by_id);
        assert_eq!(before, after);
        assert_eq!(customers.get_one(&customer.id()).unwrap(), customer);
        assert_eq!(customers.len().unwrap(), 1);
    }

    #[test]
    fn repricing_through_update_changes_later_totals() {
        let catalog = init_products();
        let (service, logger) = {
            let logger = Arc::new(MemoryOrderLogger::new());
            let service = OrderService::new([
                with_in_memory_customer_store(),
                with_in_memory_product_store(catalog.clone()),
                with_logger(logger.clone()),
            ])
            .unwrap();
            (service, logger)
        };
        let customer = Customer::new("Joseph").unwrap();
        service.customers().add(customer.clone()).unwrap();

        let beer_id = catalog[0].id();
        let mut beer = service.products().get_one(&beer_id).unwrap();
        beer.set_price(10.0).unwrap();
        // Not persisted yet.
        assert_eq!(service.create_order(&customer.id(), &[beer_id]).unwrap(), 12.45);

        service.products().update(beer).unwrap();
        assert_eq!(service.create_order(&customer.id(), &[beer_id]).unwrap(), 10.0);

        service.products().delete(&beer_id).unwrap();
        assert!(service
            .create_order(&customer.id(), &[beer_id])
            .unwrap_err()
            .is_not_found());

        assert_eq!(logger.records().len(), 2);
    }

    #[test]
    fn service_handles_concurrent_orders_and_writes() {
        let catalog = init_products();
        let logger = Arc::new(MemoryOrderLogger::new());
        let service = Arc::new(
            OrderService::new([
                with_in_memory_customer_store(),
                with_in_memory_product_store(catalog.clone()),
                with_logger(logger.clone()),
            ])
            .unwrap(),
        );

        let customers: Vec<Customer> = (0..8)
            .map(|n| Customer::new(format!("customer-{n}")).unwrap())
            .collect();
        for c in &customers {
            service.customers().add(c.clone()).unwrap();
        }

        let ids: Vec<ProductId> = catalog.iter().map(|p| p.id()).collect();
        thread::scope(|s| {
            for customer in &customers {
                let service = service.clone();
                let ids = ids.clone();
                s.spawn(move || {
                    for _ in 0..25 {
                        let total = service.create_order(&customer.id(), &ids).unwrap();
                        assert!((total - 159.35).abs() < 1e-9);
                    }
                });
            }
            // Concurrent writers touching unrelated products.
            for n in 0..4 {
                let service = service.clone();
                s.spawn(move || {
                    for i in 0..25 {
                        let extra = Product::new(format!("extra-{n}-{i}"), "filler", 1.0).unwrap();
                        service.products().add(extra).unwrap();
                    }
                });
            }
        });

        assert_eq!(logger.records().len(), customers.len() * 25);
        assert_eq!(service.products().get_all().unwrap().len(), 3 + 4 * 25);
    }
}
