//! Compile-time capability predicates.
//!
//! Checks are gated by these traits, so applying a check to a type that
//! lacks the capability fails to resolve at compile time — never at
//! runtime by inspecting the value. Each predicate classifies a *type*:
//!
//! - [`Nullable`] — plain nullable types (null is an identity state)
//! - [`NullableWrapper`] — containers that report their own null state
//! - [`Sequence`] — types with a length or emptiness predicate
//! - [`Text`] — string-like types with an optional null state
//!
//! The numeric and per-operator comparison capabilities are plain std
//! bounds (`PartialOrd`, `PartialEq`, `Display`) applied directly on the
//! check traits in [`crate::checks`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::ops::{Range, RangeInclusive};

// ============================================================================
// NULLABLE (PLAIN)
// ============================================================================

/// Plainly nullable types: null is an identity state of the value itself.
///
/// Containers that report their own null state through a method implement
/// [`NullableWrapper`] instead. The two are deliberately distinct
/// predicates with distinct failure messages, and no type implements both.
pub trait Nullable {
    /// True when the value is in its null state.
    fn is_null(&self) -> bool;
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

/// Rust strings have no null state, so the null check on them always
/// passes. Kept so chains ported from null-string languages stay
/// expressible: `ensure!(s).is_not_null()?.is_not_empty()?`.
impl Nullable for str {
    fn is_null(&self) -> bool {
        false
    }
}

impl Nullable for String {
    fn is_null(&self) -> bool {
        false
    }
}

impl Nullable for Cow<'_, str> {
    fn is_null(&self) -> bool {
        false
    }
}

// ============================================================================
// NULLABLE (WRAPPED)
// ============================================================================

/// Containers that report their own null state through a method rather
/// than by identity.
pub trait NullableWrapper {
    /// True when the container reports the absent state.
    fn is_absent(&self) -> bool;
}

impl<T: NullableWrapper + ?Sized> NullableWrapper for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T> NullableWrapper for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

// ============================================================================
// SEQUENCE
// ============================================================================

/// Category tag for sequence-like types; rendered verbatim in emptiness
/// failure messages (`"{kind} cannot be empty"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    /// Strings and string slices.
    String,
    /// Slices, arrays, vectors, deques.
    Array,
    /// Keyed maps.
    AssociativeArray,
    /// Half-open and inclusive numeric ranges.
    Range,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Array => "array",
            Self::AssociativeArray => "associative array",
            Self::Range => "range",
        })
    }
}

/// Types with a length or an emptiness predicate.
///
/// `KIND` is a static, per-type classification; it is never derived from
/// the value.
pub trait Sequence {
    /// Which category the emptiness message names.
    const KIND: SequenceKind;

    /// True when the sequence holds no elements.
    fn is_empty(&self) -> bool;
}

impl<T: Sequence + ?Sized> Sequence for &T {
    const KIND: SequenceKind = T::KIND;

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl Sequence for str {
    const KIND: SequenceKind = SequenceKind::String;

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Sequence for String {
    const KIND: SequenceKind = SequenceKind::String;

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Sequence for Cow<'_, str> {
    const KIND: SequenceKind = SequenceKind::String;

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl<T> Sequence for [T] {
    const KIND: SequenceKind = SequenceKind::Array;

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    const KIND: SequenceKind = SequenceKind::Array;

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> Sequence for Vec<T> {
    const KIND: SequenceKind = SequenceKind::Array;

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    const KIND: SequenceKind = SequenceKind::Array;

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<K, V, S> Sequence for HashMap<K, V, S> {
    const KIND: SequenceKind = SequenceKind::AssociativeArray;

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V> Sequence for BTreeMap<K, V> {
    const KIND: SequenceKind = SequenceKind::AssociativeArray;

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T: PartialOrd> Sequence for Range<T> {
    const KIND: SequenceKind = SequenceKind::Range;

    fn is_empty(&self) -> bool {
        !(self.start < self.end)
    }
}

impl<T: PartialOrd> Sequence for RangeInclusive<T> {
    const KIND: SequenceKind = SequenceKind::Range;

    fn is_empty(&self) -> bool {
        !(self.start() <= self.end())
    }
}

// ============================================================================
// TEXT
// ============================================================================

/// String-like types with an optional null state.
///
/// Plain strings always yield their text; `Option` introduces the null
/// state and flattens through its inner text. The whitespace check
/// delegates its null handling to this predicate.
pub trait Text {
    /// The text content, or `None` when the value is null.
    fn as_text(&self) -> Option<&str>;
}

impl<T: Text + ?Sized> Text for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl Text for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: Text> Text for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::as_text)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_never_null() {
        assert!(!Nullable::is_null(&""));
        assert!(!Nullable::is_null(&String::new()));
    }

    #[test]
    fn null_pointer_is_null() {
        let null: *const u8 = std::ptr::null();
        assert!(null.is_null());
        assert!(Nullable::is_null(&null));

        let value = 7_u8;
        let live: *const u8 = &raw const value;
        assert!(!Nullable::is_null(&live));
    }

    #[test]
    fn option_reports_absent_state() {
        assert!(NullableWrapper::is_absent(&None::<u32>));
        assert!(!NullableWrapper::is_absent(&Some(1_u32)));
    }

    #[test]
    fn sequence_kinds_render_as_message_fragments() {
        assert_eq!(SequenceKind::String.to_string(), "string");
        assert_eq!(SequenceKind::Array.to_string(), "array");
        assert_eq!(SequenceKind::AssociativeArray.to_string(), "associative array");
        assert_eq!(SequenceKind::Range.to_string(), "range");
    }

    #[test]
    fn sequence_kind_is_a_static_classification() {
        assert_eq!(<&str as Sequence>::KIND, SequenceKind::String);
        assert_eq!(<Vec<u8> as Sequence>::KIND, SequenceKind::Array);
        assert_eq!(<HashMap<u8, u8> as Sequence>::KIND, SequenceKind::AssociativeArray);
        assert_eq!(<Range<i32> as Sequence>::KIND, SequenceKind::Range);
    }

    #[test]
    fn range_emptiness_follows_bounds() {
        assert!(Sequence::is_empty(&(5..5)));
        assert!(!Sequence::is_empty(&(0..1)));
        assert!(!Sequence::is_empty(&(5..=5)));
        assert!(Sequence::is_empty(&(6..=5)));
    }

    #[test]
    fn text_flattens_through_option() {
        assert_eq!(Text::as_text(&"hi"), Some("hi"));
        assert_eq!(Text::as_text(&Some("hi")), Some("hi"));
        assert_eq!(Text::as_text(&None::<String>), None);
    }
}
