//! Emptiness check for sequence-like types.

use crate::foundation::{Ensured, Sequence, ValidationError};

/// Emptiness check for types with a length or emptiness predicate.
///
/// The failure message names the sequence category the type was
/// classified as: `string`, `array`, `associative array`, or `range`.
pub trait SequenceChecks: Sized {
    /// Passes when the sequence holds at least one element.
    ///
    /// May cost O(length) where emptiness is not a stored property
    /// (ranges compare their bounds; collections answer in O(1)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argus::prelude::*;
    ///
    /// let tags: Vec<&str> = Vec::new();
    /// let err = ensure!(tags).is_not_empty().unwrap_err();
    /// assert_eq!(err.to_string(), "tags: array cannot be empty");
    /// ```
    fn is_not_empty(self) -> Result<Self, ValidationError>;
}

impl<T: Sequence> SequenceChecks for Ensured<T> {
    #[track_caller]
    fn is_not_empty(self) -> Result<Self, ValidationError> {
        if self.value().is_empty() {
            Err(self.fail_with(format!("{} cannot be empty", T::KIND)))
        } else {
            Ok(self)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn non_empty_string_passes() {
        assert!(Ensured::named("name", "ada").is_not_empty().is_ok());
    }

    #[test]
    fn empty_string_fails_with_string_kind() {
        let error = Ensured::named("name", "").is_not_empty().unwrap_err();
        assert_eq!(error.to_string(), "name: string cannot be empty");
    }

    #[test]
    fn empty_vec_fails_with_array_kind() {
        let error = Ensured::named("items", Vec::<u8>::new())
            .is_not_empty()
            .unwrap_err();
        assert_eq!(error.to_string(), "items: array cannot be empty");
    }

    #[test]
    fn empty_slice_and_array_fail() {
        let empty: &[u8] = &[];
        assert!(Ensured::unnamed(empty).is_not_empty().is_err());
        assert!(Ensured::unnamed([0_u8; 0]).is_not_empty().is_err());
        assert!(Ensured::unnamed([1_u8, 2]).is_not_empty().is_ok());
    }

    #[test]
    fn empty_map_fails_with_associative_kind() {
        let error = Ensured::named("index", HashMap::<String, u32>::new())
            .is_not_empty()
            .unwrap_err();
        assert_eq!(error.to_string(), "index: associative array cannot be empty");
    }

    #[test]
    fn empty_range_fails_with_range_kind() {
        let error = Ensured::named("window", 5..5).is_not_empty().unwrap_err();
        assert_eq!(error.to_string(), "window: range cannot be empty");
        assert!(Ensured::named("window", 0..5).is_not_empty().is_ok());
    }

    #[test]
    fn owned_string_passes_through() {
        let validated = Ensured::named("name", String::from("ada"))
            .is_not_empty()
            .unwrap()
            .into_value();
        assert_eq!(validated, "ada");
    }
}
