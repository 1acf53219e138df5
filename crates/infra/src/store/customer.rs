use std::sync::Arc;

use orderdesk_core::AggregateRoot;
use orderdesk_customers::{Customer, CustomerId};

use super::error::StoreError;
use super::keyed::InMemoryKeyedStore;

/// Storage-agnostic customer repository.
///
/// Any backend satisfying this contract can be plugged into the order
/// workflow. Values cross the boundary by copy: mutating a customer returned by
/// `get_one` changes nothing until it is passed back through `update`.
///
/// ## Semantics
///
/// - `get_one`: `StoreError::NotFound` when the id is unknown
/// - `add`: insert-only; `StoreError::AlreadyExists` when the id is taken
/// - `update`: upsert; a missing id is inserted rather than rejected
pub trait CustomerStore: Send + Sync {
    fn get_one(&self, id: &CustomerId) -> Result<Customer, StoreError>;

    fn add(&self, customer: Customer) -> Result<(), StoreError>;

    fn update(&self, customer: Customer) -> Result<(), StoreError>;
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn get_one(&self, id: &CustomerId) -> Result<Customer, StoreError> {
        (**self).get_one(id)
    }

    fn add(&self, customer: Customer) -> Result<(), StoreError> {
        (**self).add(customer)
    }

    fn update(&self, customer: Customer) -> Result<(), StoreError> {
        (**self).update(customer)
    }
}

/// In-memory customer repository.
///
/// Safe to share across threads; intended for tests/dev and as the default
/// backend of the order workflow.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: InMemoryKeyedStore<CustomerId, Customer>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.customers.len()
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.customers.is_empty()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn get_one(&self, id: &CustomerId) -> Result<Customer, StoreError> {
        self.customers
            .get(id)?
            .ok_or_else(|| StoreError::not_found::<Customer>(*id))
    }

    fn add(&self, customer: Customer) -> Result<(), StoreError> {
        let id = customer.id();
        if !self.customers.insert_if_absent(id, customer)? {
            return Err(StoreError::already_exists::<Customer>(id));
        }
        Ok(())
    }

    fn update(&self, customer: Customer) -> Result<(), StoreError> {
        let id = customer.id();
        if self.customers.upsert(id, customer)? {
            tracing::debug!(customer_id = %id, "customer did not exist during update; inserted");
        }
        Ok(())
    }
}
