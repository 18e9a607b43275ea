//! The `ensure!` entry point.

/// Captures a parameter for validation.
///
/// A bare identifier is captured together with its source name, so error
/// messages are parameter-prefixed. Any other expression produces an
/// unnamed wrapper and its messages carry the bare text — Rust cannot
/// recover an identifier from a computed value, and there is nothing
/// useful to print for one anyway.
///
/// Construction never fails and has no side effects; the wrapper holds a
/// snapshot of the value (moved in, or a reference if one is given).
///
/// # Examples
///
/// ```rust
/// use argus::prelude::*;
///
/// let count = 3;
/// let err = ensure!(count).is_greater_than(5).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "count: argument (3) does not match expression (value > 5)",
/// );
///
/// let err = ensure!(1 + 2).is_greater_than(5).unwrap_err();
/// assert_eq!(err.to_string(), "argument (3) does not match expression (value > 5)");
/// ```
#[macro_export]
macro_rules! ensure {
    // A bare identifier: capture its source name.
    ($param:ident) => {
        $crate::foundation::Ensured::named(stringify!($param), $param)
    };
    // Anything else: no identifier can be derived.
    ($value:expr) => {
        $crate::foundation::Ensured::unnamed($value)
    };
}

// ============================================================================
// TESTS
// ============================================================================
