//! The built-in checks, one extension trait per capability.
//!
//! Every check consumes an [`Ensured`](crate::foundation::Ensured) wrapper
//! and returns it unchanged on pass, or the single
//! [`ValidationError`](crate::foundation::ValidationError) kind on fail.
//! Chains compose with `?`: left to right, fail-fast, no rollback needed
//! since checks only read.

pub mod between;
pub mod compare;
pub mod empty;
pub mod null;
pub mod whitespace;

pub use between::{Bounds, Inclusivity, InvalidBoundsSpec, RangeChecks};
pub use compare::{EqualityChecks, OrderingChecks};
pub use empty::SequenceChecks;
pub use null::{NullChecks, WrappedNullChecks};
pub use whitespace::TextChecks;
