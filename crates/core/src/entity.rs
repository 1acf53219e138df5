//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are shared across subdomains (a `Person` backs a customer, an
/// `Item` backs a product) and are owned exclusively by one aggregate.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
