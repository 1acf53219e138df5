use std::sync::Arc;

use orderdesk_core::AggregateRoot;
use orderdesk_products::{Product, ProductId};

use super::error::StoreError;
use super::keyed::InMemoryKeyedStore;

/// Storage-agnostic product repository.
///
/// Unlike `CustomerStore::add`, `add` here is idempotent: adding a product
/// whose id is already stored succeeds and leaves the stored copy untouched.
///
/// ## Semantics
///
/// - `get_one`: `StoreError::NotFound` when the id is unknown
/// - `get_all`: every stored product; order is unspecified
/// - `add`: no-op if the id exists
/// - `update`: upsert; a missing id is inserted rather than rejected
/// - `delete`: no-op if the id is absent
pub trait ProductStore: Send + Sync {
    fn get_one(&self, id: &ProductId) -> Result<Product, StoreError>;

    fn get_all(&self) -> Result<Vec<Product>, StoreError>;

    fn add(&self, product: Product) -> Result<(), StoreError>;

    fn update(&self, product: Product) -> Result<(), StoreError>;

    fn delete(&self, id: &ProductId) -> Result<(), StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get_one(&self, id: &ProductId) -> Result<Product, StoreError> {
        (**self).get_one(id)
    }

    fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).get_all()
    }

    fn add(&self, product: Product) -> Result<(), StoreError> {
        (**self).add(product)
    }

    fn update(&self, product: Product) -> Result<(), StoreError> {
        (**self).update(product)
    }

    fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        (**self).delete(id)
    }
}

/// In-memory product repository.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: InMemoryKeyedStore<ProductId, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.products.len()
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.products.is_empty()
    }
}

impl ProductStore for InMemoryProductStore {
    fn get_one(&self, id: &ProductId) -> Result<Product, StoreError> {
        self.products
            .get(id)?
            .ok_or_else(|| StoreError::not_found::<Product>(*id))
    }

    fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        self.products.values()
    }

    fn add(&self, product: Product) -> Result<(), StoreError> {
        self.products.insert_if_absent(product.id(), product)?;
        Ok(())
    }

    fn update(&self, product: Product) -> Result<(), StoreError> {
        let id = product.id();
        if self.products.upsert(id, product)? {
            tracing::debug!(product_id = %id, "product did not exist during update; inserted");
        }
        Ok(())
    }

    fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        self.products.remove(id)?;
        Ok(())
    }
}
