//! Aggregate root trait for the order-processing domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate is a consistency boundary around one root entity. The root
/// entity's identifier is the aggregate's identifier, which is also the only
/// key repositories use for equality and lookup.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the aggregate identifier (derived from the root entity).
    fn id(&self) -> Self::Id;

    /// Human-readable aggregate kind, used in error and log messages.
    fn kind() -> &'static str;
}
