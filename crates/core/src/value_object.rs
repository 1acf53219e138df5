//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identifier of its own; two instances holding the
/// same attributes are interchangeable. Once constructed it is never mutated,
/// so "changing" one means building a replacement.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Transaction {
///     amount: i64,
///     from: EntityId,
///     to: EntityId,
///     created_at: DateTime<Utc>,
/// }
///
/// impl ValueObject for Transaction {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
