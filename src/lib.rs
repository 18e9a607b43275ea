//! # argus
//!
//! Fluent argument validation: capture a parameter with [`ensure!`], chain
//! fail-fast checks, and get a parameter-named
//! [`ValidationError`](foundation::ValidationError) out of the first check
//! that fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use argus::prelude::*;
//!
//! fn resize(name: &str, scale: f64) -> Result<(), ValidationError> {
//!     let name = ensure!(name).is_not_empty()?.is_not_whitespace()?.into_value();
//!     let scale = ensure!(scale)
//!         .is_between_bounds(0.0, 16.0, "(]".parse().unwrap())?
//!         .into_value();
//!     # let _ = (name, scale);
//!     Ok(())
//! }
//!
//! assert!(resize("thumbnail", 2.0).is_ok());
//! assert_eq!(
//!     resize("thumbnail", 16.0).unwrap_err().to_string(),
//!     "scale: argument (16) is not strictly less than the upper bound (16)",
//! );
//! ```
//!
//! ## How checks dispatch
//!
//! Each check lives on an extension trait whose implementation is gated by a
//! capability predicate on the wrapped type ([`foundation::capability`]).
//! Applying a check to a type without the capability fails to resolve at
//! compile time; there is no runtime inspection of what a value "is".
//!
//! ## Built-in Checks
//!
//! - **Null**: [`is_not_null`](checks::NullChecks::is_not_null) for plainly
//!   nullable types, and the wrapped variant on
//!   [`WrappedNullChecks`](checks::WrappedNullChecks) for `Option`
//! - **Emptiness**: [`is_not_empty`](checks::SequenceChecks::is_not_empty)
//! - **Whitespace**: [`is_not_whitespace`](checks::TextChecks::is_not_whitespace)
//! - **Range**: [`is_between`](checks::RangeChecks::is_between) /
//!   [`is_between_bounds`](checks::RangeChecks::is_between_bounds)
//! - **Comparison**: the six operator checks on
//!   [`OrderingChecks`](checks::OrderingChecks) and
//!   [`EqualityChecks`](checks::EqualityChecks)

pub mod checks;
pub mod foundation;
mod macros;
pub mod prelude;
