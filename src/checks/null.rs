//! Null checks for the two nullable variants.
//!
//! The plain and wrapped variants stay on separate traits with separate
//! messages. No type implements both capability predicates, so
//! `is_not_null` resolves unambiguously even with both traits in scope.

use crate::foundation::{Ensured, Nullable, NullableWrapper, ValidationError};

/// Null check for plainly nullable types (identity null state).
pub trait NullChecks: Sized {
    /// Passes unless the value is in its null state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argus::prelude::*;
    ///
    /// let null: *const u8 = std::ptr::null();
    /// let err = ensure!(null).is_not_null().unwrap_err();
    /// assert_eq!(err.to_string(), "null: argument cannot be null");
    /// ```
    fn is_not_null(self) -> Result<Self, ValidationError>;
}

impl<T: Nullable> NullChecks for Ensured<T> {
    #[track_caller]
    fn is_not_null(self) -> Result<Self, ValidationError> {
        if self.value().is_null() {
            Err(self.fail_with("argument cannot be null"))
        } else {
            Ok(self)
        }
    }
}

/// Null check for containers that report their own null state.
pub trait WrappedNullChecks: Sized {
    /// Passes unless the container reports the absent state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argus::prelude::*;
    ///
    /// let user_id: Option<u64> = None;
    /// let err = ensure!(user_id).is_not_null().unwrap_err();
    /// assert_eq!(err.to_string(), "user_id: nullable cannot be null");
    /// ```
    fn is_not_null(self) -> Result<Self, ValidationError>;
}

impl<T: NullableWrapper> WrappedNullChecks for Ensured<T> {
    #[track_caller]
    fn is_not_null(self) -> Result<Self, ValidationError> {
        if self.value().is_absent() {
            Err(self.fail_with("nullable cannot be null"))
        } else {
            Ok(self)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
