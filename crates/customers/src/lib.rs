//! Customers domain module.
//!
//! This crate contains business rules for customers, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod customer;
pub mod person;
pub mod transaction;

pub use customer::{Customer, CustomerId};
pub use person::Person;
pub use transaction::Transaction;
