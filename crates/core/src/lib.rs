//! `kitbag-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console).

pub mod aggregate;
pub mod error;
pub mod text;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use text::BoundedText;
pub use value_object::ValueObject;
