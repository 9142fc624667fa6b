//! `thevault-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the customer identifier newtype, and the entity/value
//! object marker traits the banking domain is built on.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::CustomerId;
pub use value_object::ValueObject;
