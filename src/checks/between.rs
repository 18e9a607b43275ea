//! Range check with a two-symbol inclusivity specifier.

use std::fmt::Display;
use std::str::FromStr;

use crate::foundation::{Ensured, ValidationError};

// ============================================================================
// BOUND SPECIFIER
// ============================================================================

/// Inclusivity of a single bound.
///
/// Symbol mapping, kept exactly as the library documents it: `(` and `)`
/// mark an inclusive bound — the check fails only on strict violation —
/// while `[` and `]` mark an exclusive bound, where equality with the
/// bound fails too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inclusivity {
    /// The bound value itself is admitted.
    Inclusive,
    /// The bound value itself is rejected.
    Exclusive,
}

/// The two-symbol bound specifier for [`RangeChecks::is_between_bounds`].
///
/// The four legal specifiers are `"()"`, `"(]"`, `"[)"`, and `"[]"`; the
/// first symbol governs the lower bound, the second the upper. Anything
/// else is rejected when parsing ([`InvalidBoundsSpec`]) — an invalid
/// specifier can never reach a running check.
///
/// # Examples
///
/// ```rust
/// use argus::checks::Bounds;
///
/// let bounds: Bounds = "[)".parse().unwrap();
/// assert_eq!(bounds, Bounds::LOWER_EXCLUSIVE);
/// assert!("[(".parse::<Bounds>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Inclusivity of the lower bound (first symbol).
    pub lower: Inclusivity,
    /// Inclusivity of the upper bound (second symbol).
    pub upper: Inclusivity,
}

impl Bounds {
    /// `"()"` — both bounds inclusive. The default.
    pub const BOTH_INCLUSIVE: Self = Self::new(Inclusivity::Inclusive, Inclusivity::Inclusive);

    /// `"(]"` — lower inclusive, upper exclusive.
    pub const UPPER_EXCLUSIVE: Self = Self::new(Inclusivity::Inclusive, Inclusivity::Exclusive);

    /// `"[)"` — lower exclusive, upper inclusive.
    pub const LOWER_EXCLUSIVE: Self = Self::new(Inclusivity::Exclusive, Inclusivity::Inclusive);

    /// `"[]"` — both bounds exclusive.
    pub const BOTH_EXCLUSIVE: Self = Self::new(Inclusivity::Exclusive, Inclusivity::Exclusive);

    /// Builds a specifier from per-bound inclusivities.
    #[must_use]
    pub const fn new(lower: Inclusivity, upper: Inclusivity) -> Self {
        Self { lower, upper }
    }

    /// The specifier string this value corresponds to.
    #[must_use]
    pub const fn spec(self) -> &'static str {
        match (self.lower, self.upper) {
            (Inclusivity::Inclusive, Inclusivity::Inclusive) => "()",
            (Inclusivity::Inclusive, Inclusivity::Exclusive) => "(]",
            (Inclusivity::Exclusive, Inclusivity::Inclusive) => "[)",
            (Inclusivity::Exclusive, Inclusivity::Exclusive) => "[]",
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::BOTH_INCLUSIVE
    }
}

/// A bounds specifier that is not one of `"()"`, `"(]"`, `"[)"`, `"[]"`.
///
/// Raised at construction time only; checks never see an invalid
/// specifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bounds specifier {0:?}; expected one of \"()\", \"(]\", \"[)\", \"[]\"")]
pub struct InvalidBoundsSpec(pub String);

impl FromStr for Bounds {
    type Err = InvalidBoundsSpec;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        match spec {
            "()" => Ok(Self::BOTH_INCLUSIVE),
            "(]" => Ok(Self::UPPER_EXCLUSIVE),
            "[)" => Ok(Self::LOWER_EXCLUSIVE),
            "[]" => Ok(Self::BOTH_EXCLUSIVE),
            other => Err(InvalidBoundsSpec(other.to_owned())),
        }
    }
}

// ============================================================================
// RANGE CHECK
// ============================================================================

/// Range check for ordered, displayable, copyable values.
pub trait RangeChecks<T>: Sized {
    /// [`is_between_bounds`](Self::is_between_bounds) with the default
    /// `"()"` specifier (both bounds inclusive).
    fn is_between(self, lower: T, upper: T) -> Result<Self, ValidationError>;

    /// Passes when the value sits between `lower` and `upper` under the
    /// given specifier.
    ///
    /// The lower bound is checked first; on a lower-bound failure the
    /// upper bound is never evaluated. The failure message names the
    /// violated bound, its strictness, the offending value, and the bound
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argus::prelude::*;
    ///
    /// let offset = 0;
    /// assert!(ensure!(offset).is_between_bounds(0, 5, Bounds::BOTH_INCLUSIVE).is_ok());
    /// assert!(ensure!(offset).is_between_bounds(0, 5, Bounds::LOWER_EXCLUSIVE).is_err());
    /// ```
    fn is_between_bounds(
        self,
        lower: T,
        upper: T,
        bounds: Bounds,
    ) -> Result<Self, ValidationError>;
}

impl<T: PartialOrd + Display + Copy> RangeChecks<T> for Ensured<T> {
    #[track_caller]
    fn is_between(self, lower: T, upper: T) -> Result<Self, ValidationError> {
        self.is_between_bounds(lower, upper, Bounds::default())
    }

    #[track_caller]
    fn is_between_bounds(
        self,
        lower: T,
        upper: T,
        bounds: Bounds,
    ) -> Result<Self, ValidationError> {
        let value = *self.value();
        match bounds.lower {
            Inclusivity::Inclusive if value < lower => {
                return Err(self.fail_with(format!(
                    "argument ({value}) is less than the lower bound ({lower})"
                )));
            }
            Inclusivity::Exclusive if value <= lower => {
                return Err(self.fail_with(format!(
                    "argument ({value}) is not strictly greater than the lower bound ({lower})"
                )));
            }
            _ => {}
        }
        match bounds.upper {
            Inclusivity::Inclusive if value > upper => {
                return Err(self.fail_with(format!(
                    "argument ({value}) is greater than the upper bound ({upper})"
                )));
            }
            Inclusivity::Exclusive if value >= upper => {
                return Err(self.fail_with(format!(
                    "argument ({value}) is not strictly less than the upper bound ({upper})"
                )));
            }
            _ => {}
        }
        Ok(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
