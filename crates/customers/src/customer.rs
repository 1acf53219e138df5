use serde::{Deserialize, Serialize};

use orderdesk_core::{AggregateRoot, DomainError, DomainResult, EntityId};
use orderdesk_products::ProductId;

use crate::person::Person;
use crate::transaction::Transaction;

/// Customer identifier: the id of the customer's root `Person`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Customer.
///
/// Combines the root `Person`, references to products the customer holds and
/// the customer's transactions. Other aggregates are referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    person: Person,
    products: Vec<ProductId>,
    transactions: Vec<Transaction>,
}

impl Customer {
    /// Factory: validates the name and assigns a fresh id.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        DomainError::require_non_empty("customer name", &name)?;

        Ok(Self {
            person: Person {
                id: EntityId::new(),
                name,
                age: 0,
            },
            products: Vec::new(),
            transactions: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        CustomerId(self.person.id)
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn age(&self) -> u32 {
        self.person.age
    }

    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Re-key the customer. Stores treat the result as a different customer.
    pub fn set_id(&mut self, id: CustomerId) {
        self.person.id = id.0;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.name = name.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.person.age = age;
    }

    pub fn add_product(&mut self, product_id: ProductId) {
        self.products.push(product_id);
    }

    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id_typed()
    }

    fn kind() -> &'static str {
        "customer"
    }
}
