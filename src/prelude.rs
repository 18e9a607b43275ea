//! Prelude module for convenient imports.
//!
//! A single `use argus::prelude::*;` brings in the wrapper, the error, the
//! bounds types, every check trait, and the [`ensure!`](crate::ensure)
//! macro.
//!
//! # Examples
//!
//! ```rust
//! use argus::prelude::*;
//!
//! fn throttle(limit: u32) -> Result<u32, ValidationError> {
//!     Ok(ensure!(limit).is_between(1, 1000)?.into_value())
//! }
//! # assert!(throttle(10).is_ok());
//! # assert!(throttle(0).is_err());
//! ```

// ============================================================================
// FOUNDATION: wrapper, error, capability predicates
// ============================================================================

pub use crate::foundation::{
    Ensured, Nullable, NullableWrapper, Sequence, SequenceKind, Text, ValidationError,
};

// ============================================================================
// CHECKS: all extension traits and the bounds types
// ============================================================================

pub use crate::checks::{
    Bounds, EqualityChecks, Inclusivity, InvalidBoundsSpec, NullChecks, OrderingChecks,
    RangeChecks, SequenceChecks, TextChecks, WrappedNullChecks,
};

// ============================================================================
// ENTRY POINT
// ============================================================================

pub use crate::ensure;
