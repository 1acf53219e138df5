//! Products domain module.
//!
//! This crate contains the product catalog aggregate, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod item;
pub mod product;

pub use item::Item;
pub use product::{Product, ProductId};
