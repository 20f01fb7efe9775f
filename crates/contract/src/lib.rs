//! # valwrap-contract
//!
//! The two narrow contracts that connect `valwrap`-generated wrapper types
//! to the outside world:
//!
//! - [`Validate`] — implemented by validator types. A generated constructor
//!   builds each validator from the literal arguments written at the
//!   declaration site and calls [`Validate::validate`] before the wrapped
//!   value is assigned.
//! - [`Wrapper`] — implemented *by* every generated type. It associates the
//!   wrapper with its wrapped value type so that serializers, model binders
//!   and schema generators can marshal the wrapper transparently as the
//!   value it wraps. Those collaborators live outside this workspace; only
//!   the attachment point is defined here.
//!
//! Validation failures are reported as [`ValidationError`], a structured
//! error (code, message, ordered parameters) that generated constructors
//! propagate to their callers unmodified.

use std::borrow::Cow;

// ============================================================================
// VALIDATION
// ============================================================================

/// A validator over values of `Self::Input`.
///
/// Validator types are expected to expose a `new(...)` constructor whose
/// parameter list matches the attribute arguments written at the declaration
/// site; the generator re-emits those arguments verbatim.
///
/// # Examples
///
/// ```
/// use valwrap_contract::{Validate, ValidationError};
///
/// struct Range {
///     min: i32,
///     max: i32,
/// }
///
/// impl Range {
///     fn new(min: i32, max: i32) -> Self {
///         Self { min, max }
///     }
/// }
///
/// impl Validate for Range {
///     type Input = i32;
///
///     fn validate(&self, input: &i32) -> Result<(), ValidationError> {
///         if (self.min..=self.max).contains(input) {
///             Ok(())
///         } else {
///             Err(ValidationError::out_of_range(self.min, self.max, *input))
///         }
///     }
/// }
///
/// assert!(Range::new(0, 100).validate(&75).is_ok());
/// assert!(Range::new(0, 100).validate(&125).is_err());
/// ```
pub trait Validate {
    /// The type of value being validated.
    ///
    /// `?Sized` so validators can target `str` and `[T]` directly.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success, or the validator's own
    /// [`ValidationError`] on failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// A structured validation error.
///
/// Uses `Cow<'static, str>` for zero-allocation when error codes and
/// messages are known at compile time (the common case).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    /// Error code for programmatic handling, e.g. `"out_of_range"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered parameters for the message template (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error with the given code and message.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Attaches a named parameter.
    #[must_use]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Convenience constructor for range violations.
    pub fn out_of_range<T: std::fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// WRAPPER ASSOCIATION
// ============================================================================

/// Associates a generated wrapper type with the value type it wraps.
///
/// This impl is the serialization hook: an external serializer or model
/// binder that sees `W: Wrapper` may marshal `W` transparently as
/// `W::Value`. It also carries the explicit unwrap surface ([`value`] and
/// [`into_value`]) in place of the implicit conversions the generated type
/// cannot declare.
///
/// [`value`]: Wrapper::value
/// [`into_value`]: Wrapper::into_value
pub trait Wrapper {
    /// The wrapped value type.
    type Value;

    /// Borrows the wrapped value.
    fn value(&self) -> &Self::Value;

    /// Consumes the wrapper and returns the wrapped value.
    fn into_value(self) -> Self::Value;
}
