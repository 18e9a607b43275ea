//! The six comparison checks.
//!
//! The four ordering checks are generated from one operator table; the two
//! equality checks sit on a separate trait, since `PartialEq` types are
//! not necessarily ordered. Every failure message has the same shape:
//! `argument ({value}) does not match expression (value OP {other})`.

use std::fmt::Display;

use crate::foundation::{Ensured, ValidationError};

// ============================================================================
// OPERATOR TABLE
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum CmpOp {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl CmpOp {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
        }
    }

    fn holds<T: PartialOrd>(self, value: &T, other: &T) -> bool {
        match self {
            Self::Greater => value > other,
            Self::GreaterOrEqual => value >= other,
            Self::Less => value < other,
            Self::LessOrEqual => value <= other,
        }
    }
}

#[track_caller]
fn comparison_failure<T: Display>(
    wrapper: &Ensured<T>,
    symbol: &'static str,
    other: &T,
) -> ValidationError {
    wrapper.fail_with(format!(
        "argument ({}) does not match expression (value {} {})",
        wrapper.value(),
        symbol,
        other,
    ))
}

macro_rules! ordering_check {
    ($method:ident, $op:expr) => {
        #[track_caller]
        fn $method(self, other: T) -> Result<Self, ValidationError> {
            let op = $op;
            if op.holds(self.value(), &other) {
                Ok(self)
            } else {
                Err(comparison_failure(&self, op.symbol(), &other))
            }
        }
    };
}

// ============================================================================
// ORDERING CHECKS
// ============================================================================

/// Comparison checks for ordered values.
///
/// # Examples
///
/// ```rust
/// use argus::prelude::*;
///
/// let attempts = 5;
/// assert!(ensure!(attempts).is_greater_than(3).is_ok());
/// assert_eq!(
///     ensure!(attempts).is_less_than(3).unwrap_err().to_string(),
///     "attempts: argument (5) does not match expression (value < 3)",
/// );
/// ```
pub trait OrderingChecks<T>: Sized {
    /// Passes when `value > other`.
    fn is_greater_than(self, other: T) -> Result<Self, ValidationError>;

    /// Passes when `value >= other`.
    fn is_greater_or_equal(self, other: T) -> Result<Self, ValidationError>;

    /// Passes when `value < other`.
    fn is_less_than(self, other: T) -> Result<Self, ValidationError>;

    /// Passes when `value <= other`.
    fn is_less_or_equal(self, other: T) -> Result<Self, ValidationError>;
}

impl<T: PartialOrd + Display> OrderingChecks<T> for Ensured<T> {
    ordering_check!(is_greater_than, CmpOp::Greater);
    ordering_check!(is_greater_or_equal, CmpOp::GreaterOrEqual);
    ordering_check!(is_less_than, CmpOp::Less);
    ordering_check!(is_less_or_equal, CmpOp::LessOrEqual);
}

// ============================================================================
// EQUALITY CHECKS
// ============================================================================

/// Equality checks; separate from [`OrderingChecks`] because not every
/// comparable type is ordered.
pub trait EqualityChecks<T>: Sized {
    /// Passes when `value == other`.
    fn is_equal_to(self, other: T) -> Result<Self, ValidationError>;

    /// Passes when `value != other`.
    fn is_not_equal_to(self, other: T) -> Result<Self, ValidationError>;
}

impl<T: PartialEq + Display> EqualityChecks<T> for Ensured<T> {
    #[track_caller]
    fn is_equal_to(self, other: T) -> Result<Self, ValidationError> {
        if self.value() == &other {
            Ok(self)
        } else {
            Err(comparison_failure(&self, "==", &other))
        }
    }

    #[track_caller]
    fn is_not_equal_to(self, other: T) -> Result<Self, ValidationError> {
        if self.value() != &other {
            Ok(self)
        } else {
            Err(comparison_failure(&self, "!=", &other))
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
    fn greater_than_follows_the_operator() {
        assert!(Ensured::unnamed(5).is_greater_than(3).is_ok());
        assert!(Ensured::unnamed(3).is_greater_than(5).is_err());
        assert!(Ensured::unnamed(3).is_greater_than(3).is_err());
    }

    #[test]
    fn greater_or_equal_admits_equality() {
        assert!(Ensured::unnamed(3).is_greater_or_equal(3).is_ok());
        assert!(Ensured::unnamed(2).is_greater_or_equal(3).is_err());
    }

    #[test]
    fn less_than_follows_the_operator() {
        assert!(Ensured::unnamed(3).is_less_than(5).is_ok());
        assert!(Ensured::unnamed(5).is_less_than(3).is_err());
        assert!(Ensured::unnamed(3).is_less_than(3).is_err());
    }

    #[test]
    fn less_or_equal_admits_equality() {
        assert!(Ensured::unnamed(3).is_less_or_equal(3).is_ok());
        assert!(Ensured::unnamed(4).is_less_or_equal(3).is_err());
    }

    #[test]
    fn equality_checks_follow_the_operators() {
        assert!(Ensured::unnamed(3).is_equal_to(3).is_ok());
        assert!(Ensured::unnamed(3).is_equal_to(4).is_err());
        assert!(Ensured::unnamed(3).is_not_equal_to(4).is_ok());
        assert!(Ensured::unnamed(3).is_not_equal_to(3).is_err());
    }

    #[test]
    fn failure_message_shows_value_operator_and_operand() {
        let error = Ensured::named("count", 3).is_greater_than(5).unwrap_err();
        assert_eq!(
            error.to_string(),
            "count: argument (3) does not match expression (value > 5)",
        );

        let error = Ensured::named("count", 3).is_equal_to(5).unwrap_err();
        assert_eq!(
            error.to_string(),
            "count: argument (3) does not match expression (value == 5)",
        );
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert!(Ensured::unnamed("beta").is_greater_than("alpha").is_ok());
        assert!(Ensured::unnamed("alpha").is_less_than("beta").is_ok());
        assert!(Ensured::unnamed("alpha").is_equal_to("alpha").is_ok());
    }

    #[test]
    fn nan_never_satisfies_ordering() {
        assert!(Ensured::unnamed(f64::NAN).is_greater_than(0.0).is_err());
        assert!(Ensured::unnamed(f64::NAN).is_less_than(0.0).is_err());
        assert!(Ensured::unnamed(f64::NAN).is_equal_to(f64::NAN).is_err());
    }
}
