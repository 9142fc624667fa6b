//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own; it is defined entirely by its
/// attribute values. Two addresses with the same street and city *are* the
/// same address. Value objects are immutable in spirit: to change one, build
/// a new one.
///
/// Contrast with [`crate::Entity`], which is tracked by identifier:
/// `Iban` is a value object, the `Account` it identifies is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
