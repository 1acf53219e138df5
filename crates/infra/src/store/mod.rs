//! Repository contracts and their in-memory backends.
//!
//! The traits here are the whole storage boundary of the order workflow; a
//! persistent backend only has to implement them to be pluggable.

pub mod customer;
pub mod error;
pub mod keyed;
pub mod product;

pub use customer::{CustomerStore, InMemoryCustomerStore};
pub use error::StoreError;
pub use keyed::InMemoryKeyedStore;
pub use product::{InMemoryProductStore, ProductStore};
