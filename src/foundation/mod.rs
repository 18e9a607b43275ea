//! Core types: the parameter wrapper, the error kind, and the capability
//! predicates that gate which checks a type admits.

pub mod capability;
pub mod ensured;
pub mod error;

pub use capability::{Nullable, NullableWrapper, Sequence, SequenceKind, Text};
pub use ensured::Ensured;
pub use error::ValidationError;
