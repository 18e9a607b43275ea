//! The parameter wrapper that validation chains operate on.

use std::borrow::Cow;

use crate::foundation::ValidationError;

/// A captured parameter: its source name plus a snapshot of its value.
///
/// The wrapper is immutable once constructed. `T` is unconstrained here;
/// capability bounds are applied per check, so any value can be wrapped and
/// only the applicable checks will resolve on it.
///
/// Checks consume the wrapper and hand it back on success, so a chain reads
/// left to right and the caller's `?` stops it at the first failure:
///
/// ```rust
/// use argus::prelude::*;
///
/// fn connect(port: u16) -> Result<u16, ValidationError> {
///     Ok(ensure!(port).is_greater_than(0)?.into_value())
/// }
///
/// assert_eq!(connect(8080).unwrap(), 8080);
/// assert_eq!(
///     connect(0).unwrap_err().to_string(),
///     "port: argument (0) does not match expression (value > 0)",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Ensured<T> {
    name: Option<Cow<'static, str>>,
    value: T,
}

impl<T> Ensured<T> {
    /// Wraps a value together with its parameter name.
    ///
    /// An empty name is treated as absent; error messages then omit the
    /// parameter prefix.
    pub fn named(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() { None } else { Some(name) },
            value,
        }
    }

    /// Wraps a value with no parameter name.
    ///
    /// Used for computed expressions where no identifier can be derived.
    pub const fn unnamed(value: T) -> Self {
        Self { name: None, value }
    }

    /// The captured parameter name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the value once the chain is done with it.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Builds the error a failing check returns, annotated with the
    /// captured name and the check's call site.
    ///
    /// This is the sole failure path of the library: checks end with
    /// `return Err(self.fail_with(..))`, and the caller's `?` abandons the
    /// rest of the chain.
    #[track_caller]
    #[must_use]
    pub fn fail_with(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        let error = ValidationError::new(message);
        match &self.name {
            Some(name) => error.with_param(name.clone()),
            None => error,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_wrapper_exposes_name_and_value() {
        let wrapped = Ensured::named("retries", 3);
        assert_eq!(wrapped.name(), Some("retries"));
        assert_eq!(*wrapped.value(), 3);
        assert_eq!(wrapped.into_value(), 3);
    }

    #[test]
    fn empty_name_normalizes_to_absent() {
        let wrapped = Ensured::named("", 3);
        assert_eq!(wrapped.name(), None);
    }

    #[test]
    fn unnamed_wrapper_has_no_name() {
        let wrapped = Ensured::unnamed("x");
        assert_eq!(wrapped.name(), None);
    }

    #[test]
    fn fail_with_carries_the_param_name() {
        let wrapped = Ensured::named("retries", 3);
        let error = wrapped.fail_with("argument cannot be null");
        assert_eq!(error.to_string(), "retries: argument cannot be null");
    }

    #[test]
    fn fail_with_on_unnamed_wrapper_is_bare() {
        let wrapped = Ensured::unnamed(3);
        let error = wrapped.fail_with("argument cannot be null");
        assert_eq!(error.param(), None);
        assert_eq!(error.to_string(), "argument cannot be null");
    }
}
