//! The single error kind raised by failed checks.
//!
//! Every validation failure, regardless of which check produced it, is a
//! [`ValidationError`]. Callers distinguish failures by the message text
//! and the optional parameter name, not by an error code.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::panic::Location;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A failed validation check.
///
/// Carries the captured parameter name (when one was captured), a
/// human-readable message, the call site of the failing check, and an
/// optional underlying cause.
///
/// Uses `Cow<'static, str>` so static messages allocate nothing.
///
/// # Examples
///
/// ```rust
/// use argus::foundation::ValidationError;
///
/// let error = ValidationError::new("argument cannot be null").with_param("user_id");
/// assert_eq!(error.to_string(), "user_id: argument cannot be null");
///
/// let bare = ValidationError::new("argument cannot be null");
/// assert_eq!(bare.to_string(), "argument cannot be null");
/// ```
#[derive(Debug)]
pub struct ValidationError {
    param: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
    location: &'static Location<'static>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl ValidationError {
    /// Creates an error with a bare message and the caller's source
    /// location.
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            param: None,
            message: message.into(),
            location: Location::caller(),
            source: None,
        }
    }

    /// Attaches the parameter name the failing wrapper carried.
    ///
    /// An empty name is treated as absent, so messages for unnamed
    /// expressions never render a dangling `": "` prefix.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<Cow<'static, str>>) -> Self {
        let param = param.into();
        self.param = if param.is_empty() { None } else { Some(param) };
        self
    }

    /// Attaches an underlying cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The captured parameter name, if any.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// The failure message, without the parameter prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source location of the check that failed.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{param}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    // Hand-written: `Location` is a borrowed std type with no Serialize impl.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 5)?;
        state.serialize_field("param", &self.param)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("file", self.location.file())?;
        state.serialize_field("line", &self.location.line())?;
        state.serialize_field("column", &self.location.column())?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
