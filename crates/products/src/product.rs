use serde::{Deserialize, Serialize};

use orderdesk_core::{AggregateRoot, DomainError, DomainResult, EntityId};

use crate::item::Item;

/// Product identifier: the id of the product's root `Item`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Product.
///
/// Owns exactly one `Item`. Changes made through the mutators only affect this
/// copy; callers persist them with the product store's `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    item: Item,
    price: f64,
    quantity: u32,
}

impl Product {
    /// Factory: validates name, description and price, assigns a fresh id.
    ///
    /// Quantity starts at 1.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();

        DomainError::require_non_empty("product name", &name)?;
        DomainError::require_non_empty("product description", &description)?;
        ensure_price(price)?;

        Ok(Self {
            item: Item::new(name, description),
            price,
            quantity: 1,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        ProductId(self.item.id)
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn description(&self) -> &str {
        &self.item.description
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        ensure_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation(format!(
            "price must be a non-negative number (got {price})"
        )));
    }
    Ok(())
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id_typed()
    }

    fn kind() -> &'static str {
        "product"
    }
}
