//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is distinguished by its identifier, not by its attribute values:
/// two customers with the same name are still two different customers. Field
/// values may change over the entity's lifetime; the id never does.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
