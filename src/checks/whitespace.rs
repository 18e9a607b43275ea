//! Whitespace check for string-like types.

use crate::foundation::{Ensured, Text, ValidationError};

/// Whitespace check for string-like types.
pub trait TextChecks: Sized {
    /// Passes when text is present and contains at least one
    /// non-whitespace character.
    ///
    /// The null check is enforced first: a value with no text (a `None`)
    /// fails with the wrapped-null message before any character is
    /// inspected. An empty string is all-whitespace by vacuity and fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argus::prelude::*;
    ///
    /// let comment = " \t ";
    /// let err = ensure!(comment).is_not_whitespace().unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "comment: string cannot consist of only whitespace characters",
    /// );
    /// ```
    fn is_not_whitespace(self) -> Result<Self, ValidationError>;
}

impl<T: Text> TextChecks for Ensured<T> {
    #[track_caller]
    fn is_not_whitespace(self) -> Result<Self, ValidationError> {
        let Some(text) = self.value().as_text() else {
            // Delegated null check; Option is the only null-introducing Text impl.
            return Err(self.fail_with("nullable cannot be null"));
        };
        if text.chars().all(char::is_whitespace) {
            Err(self.fail_with("string cannot consist of only whitespace characters"))
        } else {
            Ok(self)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
